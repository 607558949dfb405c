//! Opacity <-> alpha conversions
//!
//! The plain conversions mirror the arithmetic exactly and never validate.
//! The `checked_*` variants route the input through a [`RangePolicy`] first.

use serde::{Deserialize, Serialize};

use crate::ALPHA_MAX;
use crate::errors::{ConvertError, Quantity};

/// What to do with a value outside its scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Convert as-is; results may fall outside the target scale
    Allow,
    /// Clamp into the scale before converting
    Clamp,
    /// Fail with [`ConvertError::OutOfRange`]
    #[default]
    Reject,
}

impl RangePolicy {
    /// Apply the policy to `value`, returning the value to convert.
    ///
    /// NaN has no place to clamp to, so `Clamp` rejects it like `Reject`;
    /// `Allow` passes it through.
    pub fn apply(self, quantity: Quantity, value: f64) -> Result<f64, ConvertError> {
        if quantity.contains(value) {
            return Ok(value);
        }
        match self {
            RangePolicy::Allow => Ok(value),
            RangePolicy::Clamp if value.is_nan() => {
                Err(ConvertError::OutOfRange { quantity, value })
            }
            RangePolicy::Clamp => {
                let (lo, hi) = quantity.bounds();
                let clamped = value.clamp(lo, hi);
                tracing::debug!(%quantity, value, clamped, "clamped out-of-range value");
                Ok(clamped)
            }
            RangePolicy::Reject => Err(ConvertError::OutOfRange { quantity, value }),
        }
    }
}

/// Convert an opacity (0.0-1.0) to an alpha channel value (0-255).
///
/// Computes `round(opacity * 255)` with ties rounded away from zero, so
/// `0.7` (178.5) becomes `179`. No clamping is done: `2.0` yields `510`.
/// Results beyond the `i64` range saturate and NaN yields `0`.
pub fn opacity_to_alpha(opacity: f64) -> i64 {
    (opacity * ALPHA_MAX).round() as i64
}

/// Convert an alpha channel value (0-255) to an opacity (0.0-1.0).
///
/// Computes `alpha / 255` without validation.
pub fn alpha_to_opacity(alpha: f64) -> f64 {
    alpha / ALPHA_MAX
}

/// [`opacity_to_alpha`] with the input checked against `policy`
pub fn checked_opacity_to_alpha(opacity: f64, policy: RangePolicy) -> Result<i64, ConvertError> {
    let opacity = policy.apply(Quantity::Opacity, opacity)?;
    Ok(opacity_to_alpha(opacity))
}

/// [`alpha_to_opacity`] with the input checked against `policy`
pub fn checked_alpha_to_opacity(alpha: f64, policy: RangePolicy) -> Result<f64, ConvertError> {
    let alpha = policy.apply(Quantity::Alpha, alpha)?;
    Ok(alpha_to_opacity(alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_to_alpha_endpoints() {
        assert_eq!(opacity_to_alpha(0.0), 0);
        assert_eq!(opacity_to_alpha(1.0), 255);
    }

    #[test]
    fn test_opacity_to_alpha_rounds_half_away_from_zero() {
        // 0.7 * 255 == 178.5 exactly in f64
        assert_eq!(opacity_to_alpha(0.7), 179);
        assert_eq!(opacity_to_alpha(0.5), 128);
        assert_eq!(opacity_to_alpha(0.1), 26);
        assert_eq!(opacity_to_alpha(0.3), 77);
        assert_eq!(opacity_to_alpha(0.9), 230);
        assert_eq!(opacity_to_alpha(-0.5), -128);
    }

    #[test]
    fn test_opacity_to_alpha_rounds_to_nearest() {
        assert_eq!(opacity_to_alpha(0.25), 64);
        assert_eq!(opacity_to_alpha(0.05), 13);
        assert_eq!(opacity_to_alpha(0.75), 191);
    }

    #[test]
    fn test_opacity_to_alpha_does_not_clamp() {
        assert_eq!(opacity_to_alpha(2.0), 510);
        assert_eq!(opacity_to_alpha(-1.0), -255);
    }

    #[test]
    fn test_opacity_to_alpha_saturates() {
        assert_eq!(opacity_to_alpha(1e300), i64::MAX);
        assert_eq!(opacity_to_alpha(-1e300), i64::MIN);
        assert_eq!(opacity_to_alpha(f64::NAN), 0);
    }

    #[test]
    fn test_alpha_to_opacity_endpoints() {
        assert_eq!(alpha_to_opacity(255.0), 1.0);
        assert_eq!(alpha_to_opacity(0.0), 0.0);
        assert_eq!(alpha_to_opacity(51.0), 0.2);
        assert_eq!(alpha_to_opacity(510.0), 2.0);
    }

    #[test]
    fn test_round_trip_within_one_step() {
        for a in 0..=255_i64 {
            let back = opacity_to_alpha(alpha_to_opacity(a as f64));
            assert!(
                (back - a).abs() <= 1,
                "alpha {} came back as {}",
                a,
                back
            );
        }
    }

    #[test]
    fn test_opacity_round_trip_within_one_step() {
        let step = 1.0 / ALPHA_MAX;
        for i in 0..=1000 {
            let x = i as f64 / 1000.0;
            let back = alpha_to_opacity(opacity_to_alpha(x) as f64);
            // a rounding tie lands exactly half a step away
            assert!(
                (back - x).abs() <= step / 2.0 + 1e-12,
                "opacity {} came back as {}",
                x,
                back
            );
        }
    }

    #[test]
    fn test_conversions_are_pure() {
        for x in [0.0, 0.33, 0.7, 1.0, 1.5] {
            assert_eq!(opacity_to_alpha(x), opacity_to_alpha(x));
            assert_eq!(alpha_to_opacity(x * 100.0), alpha_to_opacity(x * 100.0));
        }
    }

    #[test]
    fn test_policy_allow_passes_through() {
        assert_eq!(checked_opacity_to_alpha(2.0, RangePolicy::Allow), Ok(510));
        assert_eq!(checked_alpha_to_opacity(510.0, RangePolicy::Allow), Ok(2.0));
    }

    #[test]
    fn test_policy_clamp() {
        assert_eq!(checked_opacity_to_alpha(1.4, RangePolicy::Clamp), Ok(255));
        assert_eq!(checked_opacity_to_alpha(-0.2, RangePolicy::Clamp), Ok(0));
        assert_eq!(checked_alpha_to_opacity(300.0, RangePolicy::Clamp), Ok(1.0));
        assert_eq!(checked_alpha_to_opacity(-1.0, RangePolicy::Clamp), Ok(0.0));
    }

    #[test]
    fn test_policy_clamp_rejects_nan() {
        let err = checked_alpha_to_opacity(f64::NAN, RangePolicy::Clamp).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::OutOfRange {
                quantity: Quantity::Alpha,
                value
            } if value.is_nan()
        ));
        assert!(checked_opacity_to_alpha(f64::NAN, RangePolicy::Clamp).is_err());
        assert_eq!(
            checked_opacity_to_alpha(f64::INFINITY, RangePolicy::Clamp),
            Ok(255)
        );
    }

    #[test]
    fn test_policy_allow_passes_nan_through() {
        let opacity = checked_alpha_to_opacity(f64::NAN, RangePolicy::Allow).unwrap();
        assert!(opacity.is_nan());
    }

    #[test]
    fn test_policy_reject() {
        assert_eq!(
            checked_opacity_to_alpha(1.4, RangePolicy::Reject),
            Err(ConvertError::OutOfRange {
                quantity: Quantity::Opacity,
                value: 1.4
            })
        );
        assert_eq!(
            checked_alpha_to_opacity(256.0, RangePolicy::Reject),
            Err(ConvertError::OutOfRange {
                quantity: Quantity::Alpha,
                value: 256.0
            })
        );
    }

    #[test]
    fn test_policies_agree_in_range() {
        for policy in [RangePolicy::Allow, RangePolicy::Clamp, RangePolicy::Reject] {
            assert_eq!(checked_opacity_to_alpha(0.7, policy), Ok(179));
            assert_eq!(checked_alpha_to_opacity(255.0, policy), Ok(1.0));
        }
    }

    #[test]
    fn test_default_policy_is_reject() {
        assert_eq!(RangePolicy::default(), RangePolicy::Reject);
    }
}
