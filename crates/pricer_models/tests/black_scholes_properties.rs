//! Property-based tests for the normal distribution and Black-Scholes formulas.

use approx::assert_relative_eq;
use pricer_core::types::OptionParameters;
use pricer_models::analytical::{cumulative, density, evaluate_call, evaluate_put};
use pricer_models::PricingPolicy;
use proptest::prelude::*;

/// Parameter sets inside the valid domain.
fn valid_params() -> impl Strategy<Value = (OptionParameters, f64)> {
    (
        10.0f64..500.0,
        0.01f64..5.0,
        -0.05f64..0.15,
        0.01f64..1.5,
        10.0f64..500.0,
    )
        .prop_map(|(strike, expiry, rate, volatility, spot)| {
            (
                OptionParameters {
                    strike,
                    expiry,
                    rate,
                    volatility,
                },
                spot,
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_cumulative_complements(x in -40.0f64..40.0) {
        let sum = cumulative(x) + cumulative(-x);
        prop_assert!((sum - 1.0).abs() <= 1e-9, "Φ({x}) + Φ(-{x}) = {sum}");
    }

    #[test]
    fn test_cumulative_non_decreasing(x in -6.0f64..6.0, dx in 1e-3f64..1.0) {
        prop_assert!(cumulative(x + dx) >= cumulative(x));
    }

    #[test]
    fn test_cumulative_in_unit_interval(x in -50.0f64..50.0) {
        let p = cumulative(x);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_density_even_and_non_negative(x in -50.0f64..50.0) {
        prop_assert!(density(x) >= 0.0);
        prop_assert_eq!(density(x), density(-x));
    }

    #[test]
    fn test_put_call_parity((params, spot) in valid_params()) {
        // C - P = S·e^((b-r)T) - K·e^(-rT)
        let call = evaluate_call(&params, spot);
        let put = evaluate_put(&params, spot);
        let carry = ((params.cost_of_carry() - params.rate) * params.expiry).exp();
        let forward = spot * carry - params.strike * (-params.rate * params.expiry).exp();
        prop_assert!(
            (call.price - put.price - forward).abs() <= 1e-6,
            "parity violated: C={} P={} F={}", call.price, put.price, forward
        );
    }

    #[test]
    fn test_call_and_put_share_gamma((params, spot) in valid_params()) {
        let call = evaluate_call(&params, spot);
        let put = evaluate_put(&params, spot);
        prop_assert!((call.gamma - put.gamma).abs() <= 1e-9);
        prop_assert!(call.gamma >= 0.0);
    }

    #[test]
    fn test_greek_bounds((params, spot) in valid_params()) {
        let call = evaluate_call(&params, spot);
        let put = evaluate_put(&params, spot);
        prop_assert!(call.is_finite() && put.is_finite());
        prop_assert!((0.0..=1.0).contains(&call.delta));
        prop_assert!((-1.0..=0.0).contains(&put.delta));
        prop_assert!(call.price >= -1e-9);
        prop_assert!(put.price >= -1e-9);
    }

    #[test]
    fn test_policy_matches_formula((params, spot) in valid_params()) {
        prop_assert_eq!(PricingPolicy::Call.evaluate(&params, spot), evaluate_call(&params, spot));
        prop_assert_eq!(PricingPolicy::Put.evaluate(&params, spot), evaluate_put(&params, spot));
    }
}

#[test]
fn test_reference_scenario_from_unit_tests() {
    // K=100, T=1, r=0, σ=0.2, S=100
    let params = OptionParameters::new(100.0, 1.0, 0.0, 0.2).unwrap();
    let call = evaluate_call(&params, 100.0);
    let put = evaluate_put(&params, 100.0);

    assert_relative_eq!(call.price, 7.965567455405804, epsilon = 1e-10);
    assert_relative_eq!(put.price, 7.965567455405804, epsilon = 1e-10);
    assert_relative_eq!(call.gamma, 0.01984762737385059, epsilon = 1e-12);
}
