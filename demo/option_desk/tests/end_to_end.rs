//! End-to-end tests
//!
//! Runs the configured desk through its real collaborators and checks the
//! delivered results.

use approx::assert_relative_eq;
use demo_inputs::prelude::StaticSource;
use demo_outputs::prelude::RecordingSink;
use option_desk::prelude::*;
use pricer_core::types::{OptionParameters, PricingError, PricingResult};
use pricer_models::PricingPolicy;
use std::fs;
use std::path::Path;

fn read_results(path: &Path) -> Vec<PricingResult> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// ==========================================================
// Default desk
// ==========================================================

/// The default desk prices the textbook call then put at S = 60
#[test]
fn test_default_desk_golden_values() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("results.jsonl");
    let config = DeskConfig {
        output_file: Some(output.clone()),
        ..Default::default()
    };

    let summary = run_desk(&config, None).unwrap();
    assert_eq!(summary.completed, 2);

    let results = read_results(&output);
    assert_eq!(results.len(), 2);

    let call = results[0];
    assert_relative_eq!(call.price, 2.1333684449162043, epsilon = 1e-12);
    assert_relative_eq!(call.delta, 0.37248279796197303, epsilon = 1e-12);
    assert_relative_eq!(call.gamma, 0.04204275575378518, epsilon = 1e-12);

    let put = results[1];
    assert_relative_eq!(put.price, 5.846282209855296, epsilon = 1e-12);
    assert_relative_eq!(put.delta, -0.37248279796197303, epsilon = 1e-12);
    assert_relative_eq!(put.gamma, 0.04204275575378518, epsilon = 1e-12);
}

/// Pricing the put first yields the same put as pricing it second
#[test]
fn test_policy_order_does_not_leak_state() {
    let sink = RecordingSink::new();
    let source = StaticSource::default();

    let forward = DeskConfig::default();
    let reversed = DeskConfig {
        policies: vec![PricingPolicy::Put, PricingPolicy::Call],
        ..Default::default()
    };

    PricingBatch::from_config(&forward).run(&source, &sink);
    PricingBatch::from_config(&reversed).run(&source, &sink);

    let results = sink.results();
    assert_eq!(results[0], results[3]);
    assert_eq!(results[1], results[2]);
}

// ==========================================================
// Configured collaborators
// ==========================================================

#[test]
fn test_desk_from_toml_with_parameter_file() {
    let dir = tempfile::tempdir().unwrap();
    let params_path = dir.path().join("params.json");
    let output = dir.path().join("results.jsonl");
    fs::write(
        &params_path,
        r#"{"strike": 100.0, "expiry": 1.0, "rate": 0.0, "volatility": 0.2}"#,
    )
    .unwrap();

    let config_path = dir.path().join("option_desk.toml");
    fs::write(
        &config_path,
        format!(
            "underlying_prices = [100.0]\nparameters_file = {:?}\noutput_file = {:?}\n",
            params_path, output
        ),
    )
    .unwrap();

    let config = DeskConfig::load_with_env_and_validate(&config_path).unwrap();
    run_desk(&config, None).unwrap();

    let results = read_results(&output);
    assert_eq!(results.len(), 2);
    // At the money with r = 0 the call and put agree on price and gamma
    assert_relative_eq!(results[0].price, 7.965567455405804, epsilon = 1e-10);
    assert_relative_eq!(results[1].price, results[0].price, epsilon = 1e-10);
    assert_relative_eq!(results[1].gamma, results[0].gamma, epsilon = 1e-9);
}

#[test]
fn test_missing_parameter_file_fails_batch() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("results.jsonl");
    let config = DeskConfig {
        parameters_file: Some(dir.path().join("absent.json")),
        output_file: Some(output.clone()),
        ..Default::default()
    };

    let err = run_desk(&config, None).unwrap_err();
    assert!(matches!(err, DeskError::BatchFailed { failed: 2, total: 2 }));
    assert!(read_results(&output).is_empty());
}

#[test]
fn test_source_failure_reported_per_job() {
    let source = demo_inputs::prelude::FileSource::new("/nonexistent/params.json");
    let sink = RecordingSink::new();

    let summary = PricingBatch::from_config(&DeskConfig::default()).run(&source, &sink);

    assert_eq!(summary.failures.len(), 2);
    for failure in &summary.failures {
        assert!(matches!(failure.error, PricingError::DataUnavailable(_)));
    }
    assert_eq!(sink.finish_count(), 0);
}

// ==========================================================
// Parallel desk
// ==========================================================

#[test]
fn test_parallel_desk_matches_sequential() {
    let config = DeskConfig {
        underlying_prices: vec![50.0, 55.0, 60.0, 65.0, 70.0, 75.0],
        option: Some(OptionParameters::textbook()),
        ..Default::default()
    };
    let source = StaticSource::default();

    let sequential = RecordingSink::new();
    PricingBatch::from_config(&config).run(&source, &sequential);

    let parallel = RecordingSink::new();
    let summary = PricingBatch::from_config(&config)
        .parallel(true)
        .run(&source, &parallel);
    assert!(summary.is_success());

    let sort = |mut results: Vec<PricingResult>| {
        results.sort_by(|a, b| a.price.total_cmp(&b.price));
        results
    };
    assert_eq!(sort(sequential.results()), sort(parallel.results()));
}

#[test]
fn test_parallel_desk_writes_whole_lines() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("results.jsonl");
    let config = DeskConfig {
        underlying_prices: (0..50).map(|i| 40.0 + i as f64).collect(),
        parallel: true,
        output_file: Some(output.clone()),
        ..Default::default()
    };

    let summary = run_desk(&config, None).unwrap();
    assert_eq!(summary.completed, 100);

    // Every line parses, so no two emissions interleaved
    assert_eq!(read_results(&output).len(), 100);
}
