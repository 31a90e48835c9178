//! Fixed in-memory parameter source.

use pricer_core::types::{OptionParameters, PricingError};
use pricer_pipeline::Source;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Source returning the same parameter set on every fetch.
///
/// The default instance serves the textbook contract
/// (K = 65, T = 0.25, r = 0.08, σ = 0.3).
#[derive(Debug)]
pub struct StaticSource {
    params: OptionParameters,
    fetches: AtomicUsize,
}

impl StaticSource {
    /// Create a source serving `params`.
    pub fn new(params: OptionParameters) -> Self {
        Self {
            params,
            fetches: AtomicUsize::new(0),
        }
    }

    /// The parameter set served.
    pub fn params(&self) -> &OptionParameters {
        &self.params
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl Default for StaticSource {
    fn default() -> Self {
        Self::new(OptionParameters::textbook())
    }
}

impl Source for StaticSource {
    fn fetch(&self) -> Result<OptionParameters, PricingError> {
        let served = self.fetches.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(
            strike = self.params.strike,
            expiry = self.params.expiry,
            served,
            "Static parameters fetched"
        );
        Ok(self.params)
    }
}
