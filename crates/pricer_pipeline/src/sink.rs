//! Pricing result sinks.

use std::sync::Arc;

use pricer_core::types::{PricingError, PricingResult};

/// Consumes the results of pricing runs.
///
/// For each successful run the pipeline calls [`Sink::accept`] once and then
/// [`Sink::finish`] once. Implementations shared across threads must make
/// each call atomic with respect to the others.
pub trait Sink: Send + Sync {
    /// Take ownership of a computed result.
    ///
    /// # Errors
    /// [`PricingError::SinkWriteFailed`] if the result cannot be recorded.
    fn accept(&self, result: PricingResult) -> Result<(), PricingError>;

    /// Signal that no further results follow for the current run.
    ///
    /// # Errors
    /// [`PricingError::SinkWriteFailed`] if the end-of-run marker cannot be written.
    fn finish(&self) -> Result<(), PricingError>;
}

impl<T: Sink + ?Sized> Sink for &T {
    fn accept(&self, result: PricingResult) -> Result<(), PricingError> {
        (**self).accept(result)
    }

    fn finish(&self) -> Result<(), PricingError> {
        (**self).finish()
    }
}

impl<T: Sink + ?Sized> Sink for Arc<T> {
    fn accept(&self, result: PricingResult) -> Result<(), PricingError> {
        (**self).accept(result)
    }

    fn finish(&self) -> Result<(), PricingError> {
        (**self).finish()
    }
}

impl<T: Sink + ?Sized> Sink for Box<T> {
    fn accept(&self, result: PricingResult) -> Result<(), PricingError> {
        (**self).accept(result)
    }

    fn finish(&self) -> Result<(), PricingError> {
        (**self).finish()
    }
}
