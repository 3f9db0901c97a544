//! Risk tiers: static formula tables and the generic evaluator.

pub mod definition;
pub mod evaluate;
pub mod logistic;

pub use definition::{
    ALL_TIERS, HIGH_RISK, LOW_RISK, MODERATE_RISK, RiskTier, TIER_DEFINITIONS, Term,
    TierDefinition, VERY_HIGH_RISK, tier_definition,
};
pub use evaluate::{
    MissingFieldsError, TierOutcome, TierResult, compute_tier, evaluate_tier, linear_predictor,
};
pub use logistic::{format_percent, probability_percent, sigmoid};
