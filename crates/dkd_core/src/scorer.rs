//! Risk Scorer: all four tiers for one measurement set.

use crate::measurement::MeasurementSet;
use crate::tier::{ALL_TIERS, RiskTier, TierResult, compute_tier};

/// Results for the four tiers, in `ALL_TIERS` order.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskReport {
    results: [TierResult; 4],
}

impl RiskReport {
    pub fn get(&self, tier: RiskTier) -> &TierResult {
        &self.results[tier as usize]
    }

    /// Lookup by display name (`"Low Risk"`, ..., `"Very High Risk"`).
    pub fn get_by_name(&self, name: &str) -> Option<&TierResult> {
        RiskTier::from_name(name).map(|tier| self.get(tier))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierResult> {
        self.results.iter()
    }

    /// Missing-fields messages, tier order.
    pub fn errors(&self) -> Vec<String> {
        self.results.iter().filter_map(TierResult::error).collect()
    }

    pub fn scored_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_scored()).count()
    }
}

impl<'a> IntoIterator for &'a RiskReport {
    type Item = &'a TierResult;
    type IntoIter = std::slice::Iter<'a, TierResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Evaluate every tier independently.
///
/// Pure: the same measurement set always yields an identical report.
pub fn compute_all(measurements: &MeasurementSet) -> RiskReport {
    RiskReport {
        results: ALL_TIERS.map(|tier| compute_tier(tier, measurements)),
    }
}

/// Caller-owned outcome counters for [`compute_all_with_metrics`].
#[derive(Debug, Default)]
pub struct ScoringMetrics {
    scored: [u64; 4],
    missing: [u64; 4],
}

impl ScoringMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scored_total(&self, tier: RiskTier) -> u64 {
        self.scored[tier as usize]
    }

    pub fn missing_total(&self, tier: RiskTier) -> u64 {
        self.missing[tier as usize]
    }

    fn record(&mut self, result: &TierResult) {
        let slot = result.tier as usize;
        if result.is_scored() {
            self.scored[slot] += 1;
        } else {
            self.missing[slot] += 1;
        }
    }
}

/// [`compute_all`], also counting per-tier outcomes into `metrics`.
pub fn compute_all_with_metrics(
    measurements: &MeasurementSet,
    metrics: &mut ScoringMetrics,
) -> RiskReport {
    let report = compute_all(measurements);
    for result in &report {
        metrics.record(result);
    }
    report
}
