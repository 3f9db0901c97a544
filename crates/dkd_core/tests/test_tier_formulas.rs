//! Worked examples for each tier formula.
//!
//! Expected log-odds are hand-expanded from the coefficient tables;
//! percentages are two-decimal rounded.

mod common;

use common::{assert_close, full_measurements};
use dkd_core::tier::{HIGH_RISK, LOW_RISK, MODERATE_RISK, VERY_HIGH_RISK, linear_predictor};
use dkd_core::{Field, MeasurementSet, RiskTier, compute_all, compute_tier};

// ─── Very High Risk ──────────────────────────────────────────────────────

#[test]
fn test_very_high_risk_alb_40_un_6() {
    let m = MeasurementSet::new()
        .with(Field::Alb, 40.0)
        .with(Field::Un, 6.0);

    let r = compute_tier(RiskTier::VeryHigh, &m);

    // -4.750 - 0.127*40 + 0.689*6 = -5.696
    assert_close(r.log_odds().unwrap(), -5.696, "log_odds");
    assert_eq!(r.probability_percent(), Some(0.33));
    assert_eq!(r.error(), None);
}

// ─── Low Risk ────────────────────────────────────────────────────────────

#[test]
fn test_low_risk_age_0_reference_patient() {
    let r = compute_tier(RiskTier::Low, &full_measurements());

    // -9.383 - 0 - 2.76 + 3.12 - 1.5 - 1.24 + 6.0327 - 1.32 = -7.0503
    assert_close(r.log_odds().unwrap(), -7.0503, "log_odds");
    assert_eq!(r.probability_percent(), Some(0.09));
}

#[test]
fn test_low_risk_age_flag_lowers_log_odds_by_coefficient() {
    let young = compute_tier(RiskTier::Low, &full_measurements());
    let older = compute_tier(RiskTier::Low, &full_measurements().with(Field::Age, 1.0));

    let delta = older.log_odds().unwrap() - young.log_odds().unwrap();
    assert_close(delta, -1.209, "Age coefficient");
    assert_close(older.log_odds().unwrap(), -8.2593, "log_odds");
    assert_eq!(older.probability_percent(), Some(0.03));
}

// ─── Moderate Risk ───────────────────────────────────────────────────────

#[test]
fn test_moderate_risk_reference_patient() {
    let r = compute_tier(RiskTier::Moderate, &full_measurements());

    // 5.868 + 2.4 - 6.471 - 2.2392 + 1.16 = 0.7178
    assert_close(r.log_odds().unwrap(), 0.7178, "log_odds");
    assert_eq!(r.probability_percent(), Some(67.21));
}

#[test]
fn test_moderate_risk_only_its_four_fields() {
    let m = MeasurementSet::new()
        .with(Field::Sbp, 140.0)
        .with(Field::Mg, 0.8)
        .with(Field::HdlC, 1.0)
        .with(Field::Pth, 60.0);

    let r = compute_tier(RiskTier::Moderate, &m);

    // 5.868 + 2.8 - 5.752 - 1.866 + 1.74 = 2.79
    assert_close(r.log_odds().unwrap(), 2.79, "log_odds");
    assert_eq!(r.probability_percent(), Some(94.21));
}

// ─── High Risk ───────────────────────────────────────────────────────────

#[test]
fn test_high_risk_reference_patient() {
    let r = compute_tier(RiskTier::High, &full_measurements());

    // 7.888 + 0 - 8.56 - 6.3135 - 3.542 = -10.5275
    assert_close(r.log_odds().unwrap(), -10.5275, "log_odds");
    assert_eq!(r.probability_percent(), Some(0.0));
}

#[test]
fn test_high_risk_older_patient_with_low_albumin() {
    let m = MeasurementSet::new()
        .with(Field::Age, 1.0)
        .with(Field::Alb, 35.0)
        .with(Field::Mg, 0.7)
        .with(Field::Hba1c, 8.5);

    let r = compute_tier(RiskTier::High, &m);

    // 7.888 + 1.682 - 7.49 - 4.9105 - 4.301 = -7.1315
    assert_close(r.log_odds().unwrap(), -7.1315, "log_odds");
    assert_eq!(r.probability_percent(), Some(0.08));
}

// ─── compute_all over a full set ─────────────────────────────────────────

#[test]
fn test_compute_all_full_set_scores_every_tier() {
    let report = compute_all(&full_measurements());

    assert_eq!(report.scored_count(), 4);
    assert!(report.errors().is_empty());

    let expected = [
        ("Low Risk", 0.09),
        ("Moderate Risk", 67.21),
        ("High Risk", 0.0),
        ("Very High Risk", 0.17),
    ];
    for (name, pct) in expected {
        let r = report.get_by_name(name).expect("tier present");
        assert_eq!(r.probability_percent(), Some(pct), "{name}");
    }
    assert!(report.get_by_name("Extreme Risk").is_none());
}

#[test]
fn test_report_iterates_in_tier_order() {
    let report = compute_all(&full_measurements());
    let names: Vec<&str> = report.iter().map(|r| r.tier.name()).collect();
    assert_eq!(
        names,
        ["Low Risk", "Moderate Risk", "High Risk", "Very High Risk"]
    );
}

// ─── Summation order ─────────────────────────────────────────────────────

#[test]
fn test_linear_predictor_matches_hand_summed_declared_order() {
    let m = full_measurements();
    let v = |f: Field| m.get(f).unwrap();

    let low = -9.383 - 1.209 * v(Field::Age) - 0.023 * v(Field::Sbp) + 0.156 * v(Field::Ast)
        - 0.005 * v(Field::Ua)
        - 0.248 * v(Field::Un)
        + 6.703 * v(Field::Mg)
        - 0.033 * v(Field::Pth);
    let moderate = 5.868 + 0.020 * v(Field::Sbp) - 7.190 * v(Field::Mg) - 1.866 * v(Field::HdlC)
        + 0.029 * v(Field::Pth);
    let high = 7.888 + 1.682 * v(Field::Age) - 0.214 * v(Field::Alb) - 7.015 * v(Field::Mg)
        - 0.506 * v(Field::Hba1c);
    let very_high = -4.750 - 0.127 * v(Field::Alb) + 0.689 * v(Field::Un);

    // Bit-identical: same operations in the same order.
    assert_eq!(linear_predictor(&LOW_RISK, &m).unwrap(), low);
    assert_eq!(linear_predictor(&MODERATE_RISK, &m).unwrap(), moderate);
    assert_eq!(linear_predictor(&HIGH_RISK, &m).unwrap(), high);
    assert_eq!(linear_predictor(&VERY_HIGH_RISK, &m).unwrap(), very_high);
}

// ─── No range validation ─────────────────────────────────────────────────

#[test]
fn test_out_of_range_values_are_computed_through() {
    let m = MeasurementSet::new()
        .with(Field::Alb, -10.0)
        .with(Field::Un, 0.0);

    let r = compute_tier(RiskTier::VeryHigh, &m);

    // -4.750 + 1.27 = -3.48
    assert_close(r.log_odds().unwrap(), -3.48, "log_odds");
    assert_eq!(r.probability_percent(), Some(2.99));
}

#[test]
fn test_non_binary_age_is_used_directly() {
    let m = full_measurements().with(Field::Age, 2.0);
    let r = compute_tier(RiskTier::High, &m);
    assert_close(r.log_odds().unwrap(), -10.5275 + 2.0 * 1.682, "log_odds");
}
