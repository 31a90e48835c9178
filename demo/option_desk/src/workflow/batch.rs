//! Batch of pricing runs over policies and a spot ladder.

use super::{BatchSummary, JobFailure, PricingJob, ProgressCallback};
use crate::config::DeskConfig;
use pricer_pipeline::{Pipeline, Sink, Source};
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Runs a list of [`PricingJob`]s, one pipeline run each.
///
/// Every job builds its own [`Pipeline`] over the shared source and sink, so
/// a failing job never affects the others. In parallel mode jobs run on the
/// rayon pool and reach the sink in completion order.
#[derive(Clone, Default)]
pub struct PricingBatch {
    jobs: Vec<PricingJob>,
    parallel: bool,
    progress: Option<ProgressCallback>,
}

impl PricingBatch {
    /// Create a sequential batch
    pub fn new(jobs: Vec<PricingJob>) -> Self {
        Self {
            jobs,
            parallel: false,
            progress: None,
        }
    }

    /// Every configured policy at every configured underlying price,
    /// policy-major.
    pub fn from_config(config: &DeskConfig) -> Self {
        let jobs = config
            .policies
            .iter()
            .flat_map(|&policy| {
                config
                    .underlying_prices
                    .iter()
                    .map(move |&underlying| PricingJob::new(policy, underlying))
            })
            .collect();

        Self::new(jobs).parallel(config.parallel)
    }

    /// Toggle parallel execution
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Attach a progress callback
    pub fn with_progress(mut self, progress: ProgressCallback) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Jobs in submission order
    pub fn jobs(&self) -> &[PricingJob] {
        &self.jobs
    }

    /// Whether jobs run on the rayon pool
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Run every job against `source` and `sink`.
    ///
    /// Failures are collected, not propagated: the summary lists each aborted
    /// job with the error its run returned.
    pub fn run<S: Source, K: Sink>(&self, source: &S, sink: &K) -> BatchSummary {
        let start = Instant::now();
        info!(jobs = self.jobs.len(), parallel = self.parallel, "Pricing batch started");

        let outcomes: Vec<Result<(), JobFailure>> = if self.parallel {
            self.jobs
                .par_iter()
                .map(|job| self.run_job(source, sink, *job))
                .collect()
        } else {
            self.jobs
                .iter()
                .map(|job| self.run_job(source, sink, *job))
                .collect()
        };

        let failures: Vec<JobFailure> = outcomes.into_iter().filter_map(Result::err).collect();
        let summary = BatchSummary {
            total: self.jobs.len(),
            completed: self.jobs.len() - failures.len(),
            failures,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        if summary.is_success() {
            info!(completed = summary.completed, duration_ms = summary.duration_ms, "Pricing batch completed");
        } else {
            warn!(
                completed = summary.completed,
                failed = summary.failures.len(),
                duration_ms = summary.duration_ms,
                "Pricing batch completed with failures"
            );
        }

        summary
    }

    fn run_job<S: Source, K: Sink>(
        &self,
        source: &S,
        sink: &K,
        job: PricingJob,
    ) -> Result<(), JobFailure> {
        let mut pipeline = Pipeline::new(source, sink, job.policy);
        if let Some(progress) = &self.progress {
            let progress = Arc::clone(progress);
            pipeline = pipeline.with_observer(Arc::new(move |stage| progress(job, stage)));
        }

        pipeline
            .run(job.underlying)
            .map_err(|error| JobFailure { job, error })
    }
}

impl std::fmt::Debug for PricingBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingBatch")
            .field("jobs", &self.jobs)
            .field("parallel", &self.parallel)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}
