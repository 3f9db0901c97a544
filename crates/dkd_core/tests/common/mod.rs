#![allow(dead_code)]

use dkd_core::{Field, MeasurementSet};

/// Test helper: every field present, Age = 0.
///
/// For tests that need one field removed, start from this and `clear` it.
pub fn full_measurements() -> MeasurementSet {
    MeasurementSet::new()
        .with(Field::Age, 0.0)
        .with(Field::Sbp, 120.0)
        .with(Field::HdlC, 1.2)
        .with(Field::Un, 5.0)
        .with(Field::Ua, 300.0)
        .with(Field::Ast, 20.0)
        .with(Field::Pth, 40.0)
        .with(Field::Mg, 0.9)
        .with(Field::Alb, 40.0)
        .with(Field::Hba1c, 7.0)
}

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}
