//! Measurement vocabulary and the per-patient measurement set.
//!
//! Ten clinical measurements feed the tier formulas. Each one is either a
//! finite-or-not f64 or absent; no range validation happens here.

use std::fmt;

/// One of the ten named measurements.
///
/// Variant order is the canonical field order used for iteration,
/// storage and fingerprinting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Binary flag, 1 when age >= 60.
    Age,
    /// Systolic blood pressure.
    Sbp,
    /// HDL cholesterol.
    HdlC,
    /// Urea nitrogen.
    Un,
    /// Uric acid.
    Ua,
    /// Aspartate aminotransferase.
    Ast,
    /// Parathyroid hormone.
    Pth,
    /// Serum magnesium.
    Mg,
    /// Serum albumin.
    Alb,
    /// Glycated hemoglobin.
    Hba1c,
}

impl Field {
    /// Canonical key as used in input mappings and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Sbp => "SBP",
            Field::HdlC => "HDL_c",
            Field::Un => "UN",
            Field::Ua => "UA",
            Field::Ast => "AST",
            Field::Pth => "PTH",
            Field::Mg => "Mg",
            Field::Alb => "Alb",
            Field::Hba1c => "HbA1c",
        }
    }

    /// Looks up a field by its canonical key.
    ///
    /// `HDL-c` (the spelling on the input form) is accepted as an alias.
    pub fn from_name(name: &str) -> Option<Field> {
        if name == "HDL-c" {
            return Some(Field::HdlC);
        }
        ALL_FIELDS.iter().copied().find(|f| f.name() == name)
    }

    /// Clinical unit for display in usage notes.
    pub fn unit(self) -> &'static str {
        match self {
            Field::Age => "0/1 (age >= 60)",
            Field::Sbp => "mmHg",
            Field::HdlC => "mmol/L",
            Field::Un => "mmol/L",
            Field::Ua => "μmol/L",
            Field::Ast => "IU/L",
            Field::Pth => "pg/ml",
            Field::Mg => "mmol/L",
            Field::Alb => "g/L",
            Field::Hba1c => "%",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of `Field` variants. Bump together with `ALL_FIELDS`.
pub const EXPECTED_FIELD_COUNT: usize = 10;

/// Every field in canonical order.
pub const ALL_FIELDS: &[Field] = &[
    Field::Age,
    Field::Sbp,
    Field::HdlC,
    Field::Un,
    Field::Ua,
    Field::Ast,
    Field::Pth,
    Field::Mg,
    Field::Alb,
    Field::Hba1c,
];

/// A present-or-absent value for each of the ten fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasurementSet {
    values: [Option<f64>; EXPECTED_FIELD_COUNT],
}

impl MeasurementSet {
    /// Empty set: every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MeasurementSet::set`].
    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.set(field, Some(value));
        self
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        self.values[field.index()] = value;
    }

    pub fn clear(&mut self, field: Field) {
        self.set(field, None);
    }

    pub fn is_present(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Fields holding a value, in canonical order.
    pub fn present_fields(&self) -> Vec<Field> {
        ALL_FIELDS
            .iter()
            .copied()
            .filter(|&f| self.is_present(f))
            .collect()
    }

    /// Fields from `required` that are absent, in the order of `required`.
    pub fn missing_from(&self, required: &[Field]) -> Vec<Field> {
        required
            .iter()
            .copied()
            .filter(|&f| !self.is_present(f))
            .collect()
    }
}

impl FromIterator<(Field, f64)> for MeasurementSet {
    fn from_iter<I: IntoIterator<Item = (Field, f64)>>(iter: I) -> Self {
        let mut set = MeasurementSet::new();
        for (field, value) in iter {
            set.set(field, Some(value));
        }
        set
    }
}
