//! Option parameter sources.

use std::sync::Arc;

use pricer_core::types::{OptionParameters, PricingError};

/// Supplies the option parameters for a pricing run.
///
/// Called at most once per [`Pipeline::run`](crate::Pipeline::run), after the
/// underlying price has been checked.
pub trait Source: Send + Sync {
    /// Fetch a fully populated parameter set.
    ///
    /// # Errors
    /// [`PricingError::DataUnavailable`] when no parameters can be supplied.
    fn fetch(&self) -> Result<OptionParameters, PricingError>;
}

impl<T: Source + ?Sized> Source for &T {
    fn fetch(&self) -> Result<OptionParameters, PricingError> {
        (**self).fetch()
    }
}

impl<T: Source + ?Sized> Source for Arc<T> {
    fn fetch(&self) -> Result<OptionParameters, PricingError> {
        (**self).fetch()
    }
}

impl<T: Source + ?Sized> Source for Box<T> {
    fn fetch(&self) -> Result<OptionParameters, PricingError> {
        (**self).fetch()
    }
}
