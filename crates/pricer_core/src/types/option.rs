//! Option parameter and pricing result value types.
//!
//! Both types are plain `Copy` values: a source creates one
//! [`OptionParameters`] per run and a model produces one [`PricingResult`],
//! which is handed to a sink by value and never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::PricingError;
use super::validate::{ensure_finite, ensure_positive};

/// Contract terms and market inputs of a European option.
///
/// Fields are public so literal construction and deserialisation stay
/// ergonomic; [`OptionParameters::new`] and [`OptionParameters::validate`]
/// enforce the domain `strike > 0`, `expiry > 0`, `volatility > 0`.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
///
/// let params = OptionParameters::new(100.0, 1.0, 0.05, 0.2).unwrap();
/// assert_eq!(params.cost_of_carry(), 0.05);
///
/// // Volatility must be positive
/// assert!(OptionParameters::new(100.0, 1.0, 0.05, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiration in years (T)
    pub expiry: f64,
    /// Risk-free interest rate, annualised (r)
    pub rate: f64,
    /// Volatility, annualised (σ)
    pub volatility: f64,
}

impl OptionParameters {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    /// [`PricingError::InvalidParameters`] naming the first offending field.
    pub fn new(strike: f64, expiry: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        let params = Self {
            strike,
            expiry,
            rate,
            volatility,
        };
        params.validate()?;
        Ok(params)
    }

    /// The textbook example contract: K = 65, T = 0.25, r = 8%, σ = 30%.
    pub fn textbook() -> Self {
        Self {
            strike: 65.0,
            expiry: 0.25,
            rate: 0.08,
            volatility: 0.3,
        }
    }

    /// Checks the parameter domain.
    ///
    /// The rate may be zero or negative but must be finite.
    ///
    /// # Errors
    /// [`PricingError::InvalidParameters`] naming the first offending field,
    /// checked in the order strike, expiry, rate, volatility.
    pub fn validate(&self) -> Result<(), PricingError> {
        ensure_positive("strike", self.strike)?;
        ensure_positive("expiry", self.expiry)?;
        ensure_finite("rate", self.rate)?;
        ensure_positive("volatility", self.volatility)?;
        Ok(())
    }

    /// Cost-of-carry `b`. Equal to the risk-free rate: no dividend yield or
    /// storage cost is modelled.
    #[inline]
    pub fn cost_of_carry(&self) -> f64 {
        self.rate
    }
}

impl Default for OptionParameters {
    fn default() -> Self {
        Self::textbook()
    }
}

/// Price and first two spot sensitivities of an option.
///
/// Displays as `(price,delta,gamma)`.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingResult;
///
/// let result = PricingResult { price: 2.5, delta: 0.25, gamma: 0.125 };
/// assert_eq!(result.to_string(), "(2.5,0.25,0.125)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Option value
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
}

impl PricingResult {
    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.price.is_finite() && self.delta.is_finite() && self.gamma.is_finite()
    }
}

impl fmt::Display for PricingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.price, self.delta, self.gamma)
    }
}
