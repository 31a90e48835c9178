//! Desk workflow definitions.
//!
//! Provides the pricing batch and the types describing its work:
//! - [`PricingJob`]: one (policy, underlying) pair, priced by one pipeline run
//! - [`PricingBatch`]: runs a set of jobs against shared collaborators
//! - [`BatchSummary`]: outcome of a batch

mod batch;
mod desk;

pub use batch::PricingBatch;
pub use desk::{build_sink, build_source, run_desk};

use crate::error::DeskError;
use pricer_core::types::PricingError;
use pricer_models::PricingPolicy;
use pricer_pipeline::RunStage;
use std::fmt;
use std::sync::Arc;

/// One pricing run: a policy applied at an underlying price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingJob {
    /// Formula applied
    pub policy: PricingPolicy,
    /// Underlying price S
    pub underlying: f64,
}

impl PricingJob {
    /// Create a job
    pub fn new(policy: PricingPolicy, underlying: f64) -> Self {
        Self { policy, underlying }
    }
}

impl fmt::Display for PricingJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.policy, self.underlying)
    }
}

/// Progress callback, invoked on entry to each stage of each job
pub type ProgressCallback = Arc<dyn Fn(PricingJob, RunStage) + Send + Sync>;

/// A job whose run aborted, with the error it surfaced
#[derive(Debug, Clone, PartialEq)]
pub struct JobFailure {
    /// The failed job
    pub job: PricingJob,
    /// Error returned by the pipeline
    pub error: PricingError,
}

/// Batch execution result
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Jobs attempted
    pub total: usize,
    /// Jobs whose run completed
    pub completed: usize,
    /// Jobs whose run aborted
    pub failures: Vec<JobFailure>,
    /// Execution duration in milliseconds
    pub duration_ms: u64,
}

impl BatchSummary {
    /// Whether every job completed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Convert into an error if any job failed
    pub fn into_result(self) -> Result<Self, DeskError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(DeskError::batch_failed(self.failures.len(), self.total))
        }
    }
}
