//! Fitted logistic models for the four DKD progression tiers.
//!
//! Each tier is an intercept plus one coefficient per required field.
//! Coefficients are pre-trained constants and must stay exactly as written.

use std::fmt;

use crate::measurement::Field;

/// DKD progression risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskTier {
    /// Display name, also the key of the tier in a report.
    pub fn name(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Moderate => "Moderate Risk",
            RiskTier::High => "High Risk",
            RiskTier::VeryHigh => "Very High Risk",
        }
    }

    pub fn from_name(name: &str) -> Option<RiskTier> {
        ALL_TIERS.iter().copied().find(|t| t.name() == name)
    }

    pub fn definition(self) -> &'static TierDefinition {
        tier_definition(self)
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All tiers in report order.
pub const ALL_TIERS: [RiskTier; 4] = [
    RiskTier::Low,
    RiskTier::Moderate,
    RiskTier::High,
    RiskTier::VeryHigh,
];

/// One `coefficient * value` term of a tier formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub field: Field,
    pub coefficient: f64,
}

const fn term(field: Field, coefficient: f64) -> Term {
    Term { field, coefficient }
}

/// Static formula of a tier: `intercept + Σ coefficient_i * value_i`.
///
/// `terms` order is the declared order: it drives both the summation order
/// and the order of names in a missing-fields message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierDefinition {
    pub tier: RiskTier,
    pub intercept: f64,
    pub terms: &'static [Term],
}

impl TierDefinition {
    /// Required fields in declared order.
    pub fn required_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.terms.iter().map(|t| t.field)
    }

    pub fn requires(&self, field: Field) -> bool {
        self.required_fields().any(|f| f == field)
    }
}

pub const LOW_RISK: TierDefinition = TierDefinition {
    tier: RiskTier::Low,
    intercept: -9.383,
    terms: &[
        term(Field::Age, -1.209),
        term(Field::Sbp, -0.023),
        term(Field::Ast, 0.156),
        term(Field::Ua, -0.005),
        term(Field::Un, -0.248),
        term(Field::Mg, 6.703),
        term(Field::Pth, -0.033),
    ],
};

pub const MODERATE_RISK: TierDefinition = TierDefinition {
    tier: RiskTier::Moderate,
    intercept: 5.868,
    terms: &[
        term(Field::Sbp, 0.020),
        term(Field::Mg, -7.190),
        term(Field::HdlC, -1.866),
        term(Field::Pth, 0.029),
    ],
};

pub const HIGH_RISK: TierDefinition = TierDefinition {
    tier: RiskTier::High,
    intercept: 7.888,
    terms: &[
        term(Field::Age, 1.682),
        term(Field::Alb, -0.214),
        term(Field::Mg, -7.015),
        term(Field::Hba1c, -0.506),
    ],
};

pub const VERY_HIGH_RISK: TierDefinition = TierDefinition {
    tier: RiskTier::VeryHigh,
    intercept: -4.750,
    terms: &[term(Field::Alb, -0.127), term(Field::Un, 0.689)],
};

/// The four tier definitions, indexed in `ALL_TIERS` order.
pub static TIER_DEFINITIONS: [TierDefinition; 4] =
    [LOW_RISK, MODERATE_RISK, HIGH_RISK, VERY_HIGH_RISK];

pub fn tier_definition(tier: RiskTier) -> &'static TierDefinition {
    &TIER_DEFINITIONS[tier as usize]
}
