//! Generic tier evaluator.
//!
//! Presence check first, then the pure linear predictor and logistic
//! transform. A tier with missing fields reports them as data and never
//! affects any other tier.

use std::fmt;

use super::definition::{RiskTier, TierDefinition, tier_definition};
use super::logistic::probability_percent;
use crate::measurement::{Field, MeasurementSet};

/// Required fields absent for one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFieldsError {
    pub tier: RiskTier,
    /// Absent fields in the tier's declared order.
    pub missing: Vec<Field>,
}

impl fmt::Display for MissingFieldsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.missing.iter().map(|m| m.name()).collect();
        write!(
            f,
            "{} missing parameters: {}",
            self.tier.name(),
            names.join(", ")
        )
    }
}

impl std::error::Error for MissingFieldsError {}

/// Outcome of evaluating one tier.
#[derive(Debug, Clone, PartialEq)]
pub enum TierOutcome {
    Scored {
        log_odds: f64,
        /// Percentage in [0, 100], two decimals.
        probability_percent: f64,
    },
    Missing(MissingFieldsError),
}

/// Result for a single tier, freshly built per calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct TierResult {
    pub tier: RiskTier,
    pub outcome: TierOutcome,
}

impl TierResult {
    pub fn log_odds(&self) -> Option<f64> {
        match self.outcome {
            TierOutcome::Scored { log_odds, .. } => Some(log_odds),
            TierOutcome::Missing(_) => None,
        }
    }

    pub fn probability_percent(&self) -> Option<f64> {
        match self.outcome {
            TierOutcome::Scored {
                probability_percent,
                ..
            } => Some(probability_percent),
            TierOutcome::Missing(_) => None,
        }
    }

    /// Human-readable missing-fields message, if the tier could not be scored.
    pub fn error(&self) -> Option<String> {
        self.missing().map(ToString::to_string)
    }

    pub fn missing(&self) -> Option<&MissingFieldsError> {
        match &self.outcome {
            TierOutcome::Scored { .. } => None,
            TierOutcome::Missing(err) => Some(err),
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self.outcome, TierOutcome::Scored { .. })
    }
}

/// `intercept + Σ coefficient * value`, summed in declared term order.
///
/// Fails with every absent required field when any is missing; no partial
/// sum is produced.
pub fn linear_predictor(
    definition: &TierDefinition,
    measurements: &MeasurementSet,
) -> Result<f64, MissingFieldsError> {
    let values: Option<Vec<f64>> = definition
        .required_fields()
        .map(|field| measurements.get(field))
        .collect();
    let Some(values) = values else {
        let required: Vec<Field> = definition.required_fields().collect();
        return Err(MissingFieldsError {
            tier: definition.tier,
            missing: measurements.missing_from(&required),
        });
    };

    let log_odds = definition
        .terms
        .iter()
        .zip(values)
        .fold(definition.intercept, |acc, (term, value)| {
            acc + term.coefficient * value
        });
    Ok(log_odds)
}

/// Evaluate one tier definition against a measurement set.
pub fn evaluate_tier(definition: &TierDefinition, measurements: &MeasurementSet) -> TierResult {
    let outcome = match linear_predictor(definition, measurements) {
        Ok(log_odds) => {
            let probability_percent = probability_percent(log_odds);
            tracing::debug!(
                "TierScored tier={:?} log_odds={:.4} probability_percent={:.2}",
                definition.tier,
                log_odds,
                probability_percent
            );
            TierOutcome::Scored {
                log_odds,
                probability_percent,
            }
        }
        Err(err) => {
            tracing::debug!(
                "TierMissingFields tier={:?} missing={:?}",
                definition.tier,
                err.missing
            );
            TierOutcome::Missing(err)
        }
    };
    TierResult {
        tier: definition.tier,
        outcome,
    }
}

/// Evaluate the built-in definition of `tier`.
pub fn compute_tier(tier: RiskTier, measurements: &MeasurementSet) -> TierResult {
    evaluate_tier(tier_definition(tier), measurements)
}
