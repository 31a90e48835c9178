//! Criterion benchmarks for the Black-Scholes formulas.
//!
//! Measures single evaluations of each policy and a sweep across a ladder
//! of underlying prices.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::OptionParameters;
use pricer_models::analytical::{cumulative, density};
use pricer_models::PricingPolicy;

/// Benchmark the normal distribution primitives.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");
    group.bench_function("density", |b| b.iter(|| density(black_box(0.37))));
    group.bench_function("cumulative", |b| b.iter(|| cumulative(black_box(0.37))));
    group.finish();
}

/// Benchmark one evaluation per policy.
fn bench_policy_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_evaluate");
    let params = OptionParameters::textbook();

    for policy in PricingPolicy::ALL {
        group.bench_with_input(BenchmarkId::new("single", policy), &policy, |b, policy| {
            b.iter(|| policy.evaluate(black_box(&params), black_box(60.0)));
        });
    }

    group.finish();
}

/// Benchmark sweeps across underlying price ladders of increasing size.
fn bench_spot_ladder(c: &mut Criterion) {
    let mut group = c.benchmark_group("spot_ladder");
    let params = OptionParameters::textbook();

    for size in [10, 100, 1000] {
        let spots: Vec<f64> = (0..size)
            .map(|i| 40.0 + 50.0 * i as f64 / size as f64)
            .collect();
        group.bench_with_input(BenchmarkId::new("call", size), &spots, |b, spots| {
            b.iter(|| {
                spots
                    .iter()
                    .map(|&s| PricingPolicy::Call.evaluate(&params, black_box(s)).price)
                    .sum::<f64>()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_distributions,
    bench_policy_evaluate,
    bench_spot_ladder
);
criterion_main!(benches);
