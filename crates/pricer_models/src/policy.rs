//! Pricing policies: which formula a pipeline applies.
//!
//! [`PricingPolicy`] is a closed enum with one uniform operation,
//! [`PricingPolicy::evaluate`], so orchestration code can be parameterised
//! over the formula without knowing its internals. Adding a variant (an Asian
//! or barrier formula, say) only touches this module.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::{OptionParameters, PricingResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analytical::{evaluate_call, evaluate_put};

/// The formula applied to an option parameter set.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
/// use pricer_models::PricingPolicy;
///
/// let params = OptionParameters::textbook();
/// let call = PricingPolicy::Call.evaluate(&params, 60.0);
/// let put = PricingPolicy::Put.evaluate(&params, 60.0);
///
/// // Put-call parity with b = r: C - P = S - K·e^(-rT)
/// let forward = 60.0 - 65.0 * (-0.08_f64 * 0.25).exp();
/// assert!((call.price - put.price - forward).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingPolicy {
    /// European call under Black-Scholes
    Call,
    /// European put under Black-Scholes
    Put,
}

impl PricingPolicy {
    /// All policies, in declaration order.
    pub const ALL: [PricingPolicy; 2] = [PricingPolicy::Call, PricingPolicy::Put];

    /// Applies the policy's formula.
    ///
    /// Pure: no validation, NaN/Inf propagate from out-of-domain inputs.
    #[inline]
    pub fn evaluate(&self, params: &OptionParameters, spot: f64) -> PricingResult {
        match self {
            PricingPolicy::Call => evaluate_call(params, spot),
            PricingPolicy::Put => evaluate_put(params, spot),
        }
    }

    /// Lowercase policy name
    pub fn name(&self) -> &'static str {
        match self {
            PricingPolicy::Call => "call",
            PricingPolicy::Put => "put",
        }
    }
}

impl fmt::Display for PricingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown pricing policy: {0}")]
pub struct ParsePolicyError(pub String);

impl FromStr for PricingPolicy {
    type Err = ParsePolicyError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(PricingPolicy::Call),
            "put" => Ok(PricingPolicy::Put),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
