//! Numeric validation shared by every coordinate constructor and mutator.
//!
//! All checks reject rather than clamp: an out-of-range or non-finite
//! argument is a caller error, surfaced as [`LocusError::InvalidValue`].

use crate::{LocusError, Result};

/// Rejects NaN and infinite values.
pub fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LocusError::InvalidValue(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// Rejects non-finite and negative values.
pub fn check_non_negative(name: &str, value: f64) -> Result<()> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(LocusError::InvalidValue(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(())
}

/// Rejects non-finite values and values outside `[min, max]`.
pub fn check_in_range(name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    check_finite(name, value)?;
    if value < min || value > max {
        return Err(LocusError::InvalidValue(format!(
            "{name} must be within [{min}, {max}], got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_values_pass() {
        assert!(check_finite("x", 0.0).is_ok());
        assert!(check_finite("x", -1e300).is_ok());
        assert!(check_finite("x", f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn test_nan_and_infinity_rejected() {
        assert!(check_finite("x", f64::NAN).is_err());
        assert!(check_finite("x", f64::INFINITY).is_err());
        assert!(check_finite("x", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_non_negative() {
        assert!(check_non_negative("radius", 0.0).is_ok());
        assert!(check_non_negative("radius", 42.0).is_ok());
        assert!(check_non_negative("radius", -0.001).is_err());
        assert!(check_non_negative("radius", f64::NAN).is_err());
    }

    #[test]
    fn test_range_bounds_inclusive() {
        assert!(check_in_range("latitude", 0.0, 0.0, 1.0).is_ok());
        assert!(check_in_range("latitude", 1.0, 0.0, 1.0).is_ok());
        assert!(check_in_range("latitude", 1.0001, 0.0, 1.0).is_err());
        assert!(check_in_range("latitude", -0.0001, 0.0, 1.0).is_err());
    }
}
