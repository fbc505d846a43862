use rust_decimal::prelude::*;

/// Rounds `value` to `dp` decimal places, half-to-even on its exact binary value.
///
/// Non-finite input yields `0.0`, as does negative zero, so a reported figure
/// is always a plain JSON number.
pub fn round_to(value: f64, dp: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let rounded = match Decimal::from_f64_retain(value) {
        Some(d) => d
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
            .to_f64()
            .unwrap_or(0.0),
        None => {
            let factor = 10f64.powi(dp as i32);
            (value * factor).round() / factor
        }
    };
    if rounded == 0.0 || !rounded.is_finite() { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_on_the_binary_value() {
        // 2.675 is stored as 2.67499999...
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(166.666_666_666_666_66, 2), 166.67);
        assert_eq!(round_to(-83.333_333, 1), -83.3);
    }

    #[test]
    fn exact_midpoints_round_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
    }

    #[test]
    fn degenerate_values_collapse_to_zero() {
        assert_eq!(round_to(f64::NAN, 2), 0.0);
        assert_eq!(round_to(f64::INFINITY, 2), 0.0);
        assert!(round_to(-0.001, 2).is_sign_positive());
    }
}
