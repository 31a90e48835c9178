//! Input validation helpers.
//!
//! Uses `!is_finite()` so NaN, +Inf and -Inf are rejected alongside
//! out-of-domain values.

use super::error::PricingError;

/// Validate that a value is strictly positive and finite.
///
/// # Errors
/// Returns [`PricingError::InvalidParameters`] naming `field` otherwise.
///
/// # Examples
/// ```
/// use pricer_core::types::validate::ensure_positive;
///
/// assert_eq!(ensure_positive("strike", 65.0), Ok(65.0));
/// assert!(ensure_positive("strike", 0.0).is_err());
/// assert!(ensure_positive("strike", f64::NAN).is_err());
/// ```
pub fn ensure_positive(field: &'static str, value: f64) -> Result<f64, PricingError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PricingError::InvalidParameters { field, value });
    }
    Ok(value)
}

/// Validate that a value is finite (zero and negatives allowed).
///
/// # Errors
/// Returns [`PricingError::InvalidParameters`] naming `field` for NaN or Inf.
pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64, PricingError> {
    if !value.is_finite() {
        return Err(PricingError::InvalidParameters { field, value });
    }
    Ok(value)
}

/// Validate the underlying price `S` supplied to a pricing run.
///
/// # Errors
/// Returns [`PricingError::InvalidParameters`] with field `"underlying"` if
/// `S` is not strictly positive and finite.
pub fn validate_underlying(underlying: f64) -> Result<f64, PricingError> {
    ensure_positive("underlying", underlying)
}
