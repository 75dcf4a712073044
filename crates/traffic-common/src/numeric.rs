//! Decimal rounding and averaging.

/// Round to `decimals` places, resolving ties to the even neighbour.
///
/// # Examples
///
/// ```
/// use traffic_common::round_half_even;
///
/// assert_eq!(round_half_even(0.25, 1), 0.2);
/// assert_eq!(round_half_even(22.5, 0), 22.0);
/// ```
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_round_half_even_one_decimal() {
        assert_eq!(round_half_even(37.5, 1), 37.5);
        assert_eq!(round_half_even(12.34, 1), 12.3);
        assert_eq!(round_half_even(-1.25, 1), -1.2);
    }

    #[test]
    fn test_round_passes_nan_through() {
        assert!(round_half_even(f64::NAN, 1).is_nan());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0, 9.0]), Some(5.0));
    }

    proptest! {
        #[test]
        fn test_integer_ties_resolve_to_even(n in -100_000i64..100_000) {
            let rounded = round_half_even(n as f64 + 0.5, 0);
            let expected = if n % 2 == 0 { n } else { n + 1 };
            prop_assert_eq!(rounded, expected as f64);
        }

        #[test]
        fn test_rounding_stays_within_half_a_step(value in -1.0e6f64..1.0e6) {
            let rounded = round_half_even(value, 1);
            prop_assert!((rounded - value).abs() <= 0.05 + 1e-9);
        }
    }
}
