//! Error types for the option desk.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Desk error type
#[derive(Debug, Error)]
pub enum DeskError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Pricing error raised outside a batch run (e.g. opening a sink)
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Some runs of a batch failed
    #[error("{failed} of {total} pricing runs failed")]
    BatchFailed {
        /// Failed runs
        failed: usize,
        /// Runs attempted
        total: usize,
    },
}

impl DeskError {
    /// Create a batch failure error
    pub fn batch_failed(failed: usize, total: usize) -> Self {
        Self::BatchFailed { failed, total }
    }
}
