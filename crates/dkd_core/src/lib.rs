#![forbid(unsafe_code)]
//! Diabetic kidney disease (DKD) progression risk scoring.
//!
//! Four independently fitted logistic models, one per risk tier. Each tier
//! checks its own required measurements; a missing value only blocks the
//! tiers that need it.

pub mod fingerprint;
pub mod measurement;
pub mod scorer;
pub mod tier;

pub use fingerprint::{format_fingerprint, measurement_fingerprint};
pub use measurement::{ALL_FIELDS, Field, MeasurementSet};
pub use scorer::{RiskReport, ScoringMetrics, compute_all, compute_all_with_metrics};
pub use tier::{
    ALL_TIERS, MissingFieldsError, RiskTier, TierDefinition, TierOutcome, TierResult,
    compute_tier, evaluate_tier,
};
