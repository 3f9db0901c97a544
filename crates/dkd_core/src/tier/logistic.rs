//! Log-odds to probability transform.

/// Logistic function `1 / (1 + e^(-x))`.
pub fn sigmoid(log_odds: f64) -> f64 {
    1.0 / (1.0 + (-log_odds).exp())
}

/// Probability as a percentage rounded to two decimals.
///
/// Ties round half away from zero (`f64::round`).
pub fn probability_percent(log_odds: f64) -> f64 {
    let pct = sigmoid(log_odds) * 100.0;
    (pct * 100.0).round() / 100.0
}

/// Fixed two-decimal rendering, trailing zeros kept (`50.00`).
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_log_odds_is_fifty_percent() {
        assert_eq!(probability_percent(0.0), 50.0);
        assert_eq!(format_percent(probability_percent(0.0)), "50.00");
    }

    #[test]
    fn extremes_saturate() {
        assert_eq!(probability_percent(1_000.0), 100.0);
        assert_eq!(probability_percent(-1_000.0), 0.0);
        assert_eq!(format_percent(probability_percent(-1_000.0)), "0.00");
    }

    #[test]
    fn sigmoid_is_symmetric() {
        for x in [0.1, 1.0, 2.5, 7.0] {
            let sum = sigmoid(x) + sigmoid(-x);
            assert!((sum - 1.0).abs() < 1e-12, "sigmoid({x}) + sigmoid(-{x}) = {sum}");
        }
    }
}
