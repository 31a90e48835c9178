//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Every failure a pricing run can surface to its caller

use thiserror::Error;

/// Categorised pricing errors.
///
/// A pricing run never retries and never swallows a failure: each variant is
/// terminal for the run that raised it and reaches the caller unchanged.
///
/// # Variants
/// - `InvalidParameters`: Non-positive or non-finite strike, expiry,
///   volatility or underlying price
/// - `DataUnavailable`: The parameter source could not supply a value
/// - `SinkWriteFailed`: The result sink could not accept or finish
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameters { field: "volatility", value: -0.2 };
/// assert_eq!(format!("{}", err), "Invalid parameters: volatility = -0.2");
///
/// let err = PricingError::data_unavailable("feed offline");
/// assert_eq!(format!("{}", err), "Data unavailable: feed offline");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A pricing input violated its domain.
    #[error("Invalid parameters: {field} = {value}")]
    InvalidParameters {
        /// Name of the offending input
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The source collaborator could not supply option parameters.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// The sink collaborator could not accept a result or finish a run.
    #[error("Sink write failed: {0}")]
    SinkWriteFailed(String),
}

impl PricingError {
    /// Create a data unavailable error
    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }

    /// Create a sink write error
    pub fn sink_write_failed(msg: impl Into<String>) -> Self {
        Self::SinkWriteFailed(msg.into())
    }

    /// Whether the error stems from invalid inputs rather than a collaborator.
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, Self::InvalidParameters { .. })
    }
}
