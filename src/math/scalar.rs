use std::f64::consts::PI;

/// Returns `-1.0`, `0.0` or `1.0` according to the sign of `value`.
///
/// Unlike [`f64::signum`], zero (of either sign) maps to `0.0`.
#[must_use]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Clamps `value` into `[low, high]`.
///
/// Computed as `min(max(low, value), high)`, so an inverted range yields
/// `high` instead of panicking like [`f64::clamp`].
#[must_use]
pub fn clamp(low: f64, value: f64, high: f64) -> f64 {
    low.max(value).min(high)
}

/// Linear interpolation from `a` to `b`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cosine interpolation from `a` to `b`: eases in and out around the ends.
#[must_use]
pub fn cerp(a: f64, b: f64, t: f64) -> f64 {
    let f = (1.0 - (t * PI).cos()) * 0.5;
    a * (1.0 - f) + b * f
}

/// Rounds `value` to `decimals` decimal places (half away from zero).
///
/// Negative `decimals` round to tens, hundreds, and so on.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10.0_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Rounds `value` to the nearest multiple of `multiple`.
///
/// A zero multiple leaves the value unchanged.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn round_to_multiple(value: f64, multiple: f64) -> f64 {
    if multiple == 0.0 {
        return value;
    }
    (value / multiple).round() * multiple
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-1e-300), -1.0);
    }

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp(0.0, 5.0, 10.0), 5.0);
        assert_eq!(clamp(0.0, -5.0, 10.0), 0.0);
        assert_eq!(clamp(0.0, 15.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_inverted_range_does_not_panic() {
        assert_eq!(clamp(10.0, 5.0, 0.0), 0.0);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn cerp_matches_lerp_at_key_points() {
        assert_relative_eq!(cerp(2.0, 6.0, 0.0), 2.0);
        assert_relative_eq!(cerp(2.0, 6.0, 0.5), 4.0, epsilon = 1e-12);
        assert_relative_eq!(cerp(2.0, 6.0, 1.0), 6.0, epsilon = 1e-12);
        // Eased: slower than linear near the start.
        assert!(cerp(0.0, 1.0, 0.25) < lerp(0.0, 1.0, 0.25));
    }

    #[test]
    fn round_to_decimals() {
        assert_relative_eq!(round_to(3.14159, 2), 3.14);
        assert_relative_eq!(round_to(2.5, 0), 3.0);
        assert_relative_eq!(round_to(1234.0, -2), 1200.0, epsilon = 1e-9);
    }

    #[test]
    fn round_to_multiples() {
        assert_relative_eq!(round_to_multiple(17.0, 5.0), 15.0);
        assert_relative_eq!(round_to_multiple(18.0, 5.0), 20.0);
        assert_relative_eq!(round_to_multiple(0.7, 0.25), 0.75);
        assert_eq!(round_to_multiple(7.3, 0.0), 7.3);
    }
}
