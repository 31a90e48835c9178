//! Single-shot Source → Transform → Sink pricing pipeline.

use std::fmt;
use std::sync::Arc;

use pricer_core::types::{validate_underlying, PricingError};
use pricer_models::PricingPolicy;
use tracing::{debug, warn};

use crate::sink::Sink;
use crate::source::Source;

/// Stage of a pricing run.
///
/// Every run starts at `Idle`, moves to `Fetched` once parameters are in hand
/// and reaches `Completed` after the sink accepted the result. Nothing is
/// carried from one run to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStage {
    /// No parameters fetched yet
    Idle,
    /// Parameters fetched and validated
    Fetched,
    /// Result handed to the sink
    Completed,
}

impl RunStage {
    /// Get the stage name for display
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Fetched => "Fetched",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Callback invoked on entry to each [`RunStage`].
pub type StageObserver = Arc<dyn Fn(RunStage) + Send + Sync>;

/// Prices one option per run by pulling parameters from a [`Source`],
/// applying a [`PricingPolicy`] and pushing the result into a [`Sink`].
///
/// The pipeline keeps only its collaborators and policy between runs, so it
/// can be built once and run repeatedly with different underlying prices.
///
/// # Validation
///
/// The formulas themselves propagate NaN for out-of-domain inputs. The
/// pipeline instead fails fast: the underlying price is checked before the
/// source is called and the fetched parameters before evaluation. An invalid
/// run never reaches the sink.
///
/// # Examples
/// ```
/// use pricer_pipeline::prelude::*;
/// use std::sync::Mutex;
///
/// struct Fixed;
/// impl Source for Fixed {
///     fn fetch(&self) -> Result<OptionParameters, PricingError> {
///         Ok(OptionParameters::textbook())
///     }
/// }
///
/// #[derive(Default)]
/// struct Last(Mutex<Option<PricingResult>>);
/// impl Sink for Last {
///     fn accept(&self, result: PricingResult) -> Result<(), PricingError> {
///         *self.0.lock().unwrap() = Some(result);
///         Ok(())
///     }
///     fn finish(&self) -> Result<(), PricingError> {
///         Ok(())
///     }
/// }
///
/// let sink = Last::default();
/// let pipeline = Pipeline::new(Fixed, &sink, PricingPolicy::Call);
/// pipeline.run(60.0)?;
///
/// let result = sink.0.lock().unwrap().unwrap();
/// assert!((result.price - 2.1333684449).abs() < 1e-9);
/// # Ok::<(), PricingError>(())
/// ```
pub struct Pipeline<S, K> {
    source: S,
    sink: K,
    policy: PricingPolicy,
    observer: Option<StageObserver>,
}

impl<S: Source, K: Sink> Pipeline<S, K> {
    /// Create a pipeline from its collaborators and policy.
    pub fn new(source: S, sink: K, policy: PricingPolicy) -> Self {
        Self {
            source,
            sink,
            policy,
            observer: None,
        }
    }

    /// Attach a callback notified on entry to each stage of every run.
    pub fn with_observer(mut self, observer: StageObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The policy applied by every run.
    pub fn policy(&self) -> PricingPolicy {
        self.policy
    }

    /// The parameter source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The result sink.
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Price at underlying price `underlying` and deliver the result.
    ///
    /// Runs `fetch → evaluate → accept → finish`. The first failure ends the
    /// run and is returned unchanged; there are no retries.
    ///
    /// # Errors
    /// - [`PricingError::InvalidParameters`] for a non-positive underlying or
    ///   an out-of-domain parameter set
    /// - [`PricingError::DataUnavailable`] from the source
    /// - [`PricingError::SinkWriteFailed`] from the sink
    pub fn run(&self, underlying: f64) -> Result<(), PricingError> {
        let outcome = self.execute(underlying);
        if let Err(err) = &outcome {
            warn!(policy = %self.policy, underlying, error = %err, "Pricing run aborted");
        }
        outcome
    }

    fn execute(&self, underlying: f64) -> Result<(), PricingError> {
        self.enter(RunStage::Idle, underlying);
        validate_underlying(underlying)?;

        let params = self.source.fetch()?;
        params.validate()?;
        self.enter(RunStage::Fetched, underlying);

        let result = self.policy.evaluate(&params, underlying);
        debug!(
            policy = %self.policy,
            underlying,
            price = result.price,
            delta = result.delta,
            gamma = result.gamma,
            "Evaluated"
        );

        self.sink.accept(result)?;
        self.enter(RunStage::Completed, underlying);
        self.sink.finish()
    }

    fn enter(&self, stage: RunStage, underlying: f64) {
        debug!(stage = %stage, policy = %self.policy, underlying, "Pipeline stage");
        if let Some(observer) = &self.observer {
            observer(stage);
        }
    }
}

impl<S, K> fmt::Debug for Pipeline<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("policy", &self.policy)
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
