//! Raw form input to `MeasurementSet`.
//!
//! Text semantics: blank text is absent, and so is text that does not
//! parse as a number. The scorer never sees a "malformed" value.
//! Unknown field names are rejected here; they never reach the scorer.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use dkd_core::{Field, MeasurementSet};
use serde::Deserialize;

/// Parse one measurement text box.
pub fn parse_measurement(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Parse the "age >= 60" selector.
///
/// Accepts yes/no spellings (including the form's 是/否) and falls back
/// to [`parse_measurement`] for anything else.
pub fn parse_age_flag(text: &str) -> Option<f64> {
    match text.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "是" => Some(1.0),
        "no" | "n" | "false" | "否" => Some(0.0),
        other => parse_measurement(other),
    }
}

/// One raw form value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    fn resolve(&self, field: Field) -> Option<f64> {
        match self {
            FormValue::Number(v) => Some(*v),
            FormValue::Text(t) if field == Field::Age => parse_age_flag(t),
            FormValue::Text(t) => parse_measurement(t),
        }
    }
}

/// Errors from reading form input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// Key is not one of the ten measurement names.
    UnknownField(String),
    /// Command-line token without `KEY=VALUE` shape.
    MalformedAssignment(String),
    /// JSON body could not be decoded as an object of measurements.
    InvalidJson(String),
    /// JSON body names the same field twice, e.g. `HDL_c` and `HDL-c`.
    DuplicateField(Field),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnknownField(name) => write!(f, "unknown measurement '{name}'"),
            InputError::MalformedAssignment(token) => {
                write!(f, "expected KEY=VALUE, got '{token}'")
            }
            InputError::InvalidJson(msg) => write!(f, "invalid measurement JSON: {msg}"),
            InputError::DuplicateField(field) => {
                write!(f, "measurement '{field}' given more than once")
            }
        }
    }
}

impl std::error::Error for InputError {}

fn lookup_field(name: &str) -> Result<Field, InputError> {
    let name = name.trim();
    Field::from_name(name).ok_or_else(|| InputError::UnknownField(name.to_string()))
}

/// Raw, unparsed values keyed by field. A later value for the same field
/// replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementForm {
    values: BTreeMap<Field, FormValue>,
}

impl MeasurementForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, value: FormValue) {
        self.values.insert(field, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay `other`; its values win on shared fields.
    pub fn extend(&mut self, other: MeasurementForm) {
        self.values.extend(other.values);
    }

    /// Parse `KEY=VALUE` tokens, e.g. `["SBP=120", "Alb=40"]`.
    ///
    /// `KEY=` (empty value) is accepted and yields an absent measurement.
    pub fn from_assignments<S: AsRef<str>>(tokens: &[S]) -> Result<Self, InputError> {
        let mut form = MeasurementForm::new();
        for token in tokens {
            let token = token.as_ref();
            let (key, value) = token
                .split_once('=')
                .ok_or_else(|| InputError::MalformedAssignment(token.to_string()))?;
            let field = lookup_field(key)?;
            form.insert(field, FormValue::Text(value.to_string()));
        }
        Ok(form)
    }

    /// Parse a JSON object such as `{"SBP": 120, "Age": "yes", "UN": null}`.
    ///
    /// Keys are visited in sorted order, so errors are deterministic. Two keys
    /// naming the same field (an alias and its canonical name) are rejected.
    pub fn from_json(body: &str) -> Result<Self, InputError> {
        let raw: BTreeMap<String, Option<FormValue>> =
            serde_json::from_str(body).map_err(|e| InputError::InvalidJson(e.to_string()))?;

        let mut form = MeasurementForm::new();
        let mut seen = BTreeSet::new();
        for (key, value) in raw {
            let field = lookup_field(&key)?;
            if !seen.insert(field) {
                return Err(InputError::DuplicateField(field));
            }
            if let Some(value) = value {
                form.insert(field, value);
            }
        }
        Ok(form)
    }

    /// Build the measurement set. `age_when_absent` fills Age when the form
    /// left it unset or unparseable.
    pub fn into_measurements(self, age_when_absent: Option<f64>) -> MeasurementSet {
        let mut set = MeasurementSet::new();
        for (field, value) in &self.values {
            set.set(*field, value.resolve(*field));
        }
        if !set.is_present(Field::Age) {
            set.set(Field::Age, age_when_absent);
        }
        set
    }
}
