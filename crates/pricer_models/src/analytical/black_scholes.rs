//! Black-Scholes pricing formulas for European options.
//!
//! Closed-form price, delta and gamma for calls and puts on a single
//! underlying, with cost-of-carry `b` equal to the risk-free rate.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Inputs are not validated here: with non-positive strike, expiry,
//! volatility or spot the formulas yield NaN/Inf exactly as IEEE 754 dictates.

use pricer_core::types::{OptionParameters, PricingResult};

use super::distributions::{cumulative, density};

/// Terms shared by the call and put formulas.
#[derive(Debug, Clone, Copy)]
struct Intermediates {
    d1: f64,
    d2: f64,
    /// σ√T
    std_dev: f64,
    /// e^((b-r)T)
    carry: f64,
    /// e^(-rT)
    discount: f64,
}

impl Intermediates {
    #[inline]
    fn compute(params: &OptionParameters, spot: f64) -> Self {
        let OptionParameters {
            strike,
            expiry,
            rate,
            volatility,
        } = *params;
        let carry_rate = params.cost_of_carry();

        let std_dev = volatility * expiry.sqrt();
        let d1 = ((spot / strike).ln() + (carry_rate + 0.5 * volatility * volatility) * expiry)
            / std_dev;
        let d2 = d1 - std_dev;

        Self {
            d1,
            d2,
            std_dev,
            carry: ((carry_rate - rate) * expiry).exp(),
            discount: (-rate * expiry).exp(),
        }
    }

    /// Gamma = φ(d₁)·e^((b-r)T) / (S·σ√T), identical for calls and puts.
    #[inline]
    fn gamma(&self, spot: f64) -> f64 {
        density(self.d1) * self.carry / (spot * self.std_dev)
    }
}

/// Values a European call: price, delta and gamma.
///
/// - Price = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
/// - Delta = e^((b-r)T)·N(d₁)
/// - Gamma = φ(d₁)·e^((b-r)T) / (S·σ√T)
///
/// # Arguments
/// * `params` - Strike, expiry, rate and volatility
/// * `spot` - Underlying price (S)
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
/// use pricer_models::analytical::evaluate_call;
///
/// let params = OptionParameters::new(100.0, 1.0, 0.0, 0.2).unwrap();
/// let call = evaluate_call(&params, 100.0);
///
/// assert!(call.price > 0.0);
/// assert!(call.delta > 0.0 && call.delta < 1.0);
/// assert!(call.gamma > 0.0);
/// ```
#[inline]
pub fn evaluate_call(params: &OptionParameters, spot: f64) -> PricingResult {
    let terms = Intermediates::compute(params, spot);
    let n_d1 = cumulative(terms.d1);
    let n_d2 = cumulative(terms.d2);

    PricingResult {
        price: spot * terms.carry * n_d1 - params.strike * terms.discount * n_d2,
        delta: terms.carry * n_d1,
        gamma: terms.gamma(spot),
    }
}

/// Values a European put: price, delta and gamma.
///
/// - Price = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
/// - Delta = e^((b-r)T)·(N(-d₁) - 1)
/// - Gamma = φ(d₁)·e^((b-r)T) / (S·σ√T)
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
/// use pricer_models::analytical::{evaluate_call, evaluate_put};
///
/// let params = OptionParameters::new(100.0, 1.0, 0.0, 0.2).unwrap();
/// let put = evaluate_put(&params, 100.0);
///
/// assert!(put.price > 0.0);
/// assert!(put.delta < 0.0);
/// assert_eq!(put.gamma, evaluate_call(&params, 100.0).gamma);
/// ```
#[inline]
pub fn evaluate_put(params: &OptionParameters, spot: f64) -> PricingResult {
    let terms = Intermediates::compute(params, spot);
    let n_minus_d1 = cumulative(-terms.d1);
    let n_minus_d2 = cumulative(-terms.d2);

    PricingResult {
        price: params.strike * terms.discount * n_minus_d2 - spot * terms.carry * n_minus_d1,
        delta: terms.carry * (n_minus_d1 - 1.0),
        gamma: terms.gamma(spot),
    }
}
