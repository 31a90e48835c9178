//! # Downstream Systems
//!
//! Result sinks consuming the option desk's pricing output.
//!
//! Every sink implements [`pricer_pipeline::Sink`]: `accept` receives one
//! [`pricer_core::types::PricingResult`] per run and `finish` marks the end
//! of that run.
//!
//! ## Modules
//!
//! - [`result_sink`]: Console, file and in-memory sinks

pub mod result_sink;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::result_sink::{ConsoleSink, JsonLinesSink, RecordingSink};
}
