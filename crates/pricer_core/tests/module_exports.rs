//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable via absolute paths
//! and through the module-level re-exports.

/// Test that value types are accessible via absolute path.
#[test]
fn test_option_module_exports() {
    use pricer_core::types::option::OptionParameters;
    use pricer_core::types::option::PricingResult;

    let params = OptionParameters::textbook();
    assert!(params.validate().is_ok());

    let result = PricingResult {
        price: 1.0,
        delta: 0.5,
        gamma: 0.01,
    };
    assert!(result.is_finite());
}

/// Test that validation helpers are accessible via absolute path.
#[test]
fn test_validate_module_exports() {
    use pricer_core::types::validate::{ensure_finite, ensure_positive, validate_underlying};

    assert!(ensure_positive("strike", 1.0).is_ok());
    assert!(ensure_finite("rate", -1.0).is_ok());
    assert!(validate_underlying(0.0).is_err());
}

/// Test that the error type is accessible via absolute path.
#[test]
fn test_error_module_exports() {
    use pricer_core::types::error::PricingError;

    let err = PricingError::sink_write_failed("closed");
    assert!(err.to_string().contains("closed"));
}

/// Test module-level re-exports.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{validate_underlying, OptionParameters, PricingError, PricingResult};

    let params = OptionParameters::new(65.0, 0.25, 0.08, 0.3).unwrap();
    assert_eq!(params, OptionParameters::textbook());
    assert_eq!(validate_underlying(60.0), Ok(60.0));

    let result = PricingResult {
        price: 0.0,
        delta: 0.0,
        gamma: 0.0,
    };
    assert_eq!(result.to_string(), "(0,0,0)");

    let err: Result<(), PricingError> = Err(PricingError::data_unavailable("x"));
    assert!(err.is_err());
}
