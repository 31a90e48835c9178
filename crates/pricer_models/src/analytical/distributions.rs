//! Standard normal distribution functions.
//!
//! This module provides:
//! - `density`: Probability density function (PDF)
//! - `cumulative`: Cumulative distribution function (CDF)
//!
//! The CDF goes through the error function from `statrs`, which is accurate
//! to machine precision and exactly odd, so `cumulative(0)` is exactly 0.5
//! and `cumulative(x) + cumulative(-x)` is 1 to within rounding.

use statrs::function::erf::erf;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// Total over finite `x`; underflows to 0 for large |x|.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::density;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((density(0.0) - 0.3989422804014327).abs() < 1e-12);
///
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((density(1.0) - 0.24197072451914337).abs() < 1e-12);
/// ```
#[inline]
pub fn density(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * (1 - erf(-x / sqrt(2)))
///
/// # Returns
/// The probability P(X <= x), in range [0, 1].
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::cumulative;
///
/// assert_eq!(cumulative(0.0), 0.5);
/// assert!(cumulative(-3.0) < 0.01);
/// assert!(cumulative(3.0) > 0.99);
/// ```
#[inline]
pub fn cumulative(x: f64) -> f64 {
    0.5 * (1.0 - erf(-x / SQRT_2))
}
