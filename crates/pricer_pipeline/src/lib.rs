//! # Pricer Pipeline (L3: Orchestration)
//!
//! Runs one pricing computation as Source → Transform → Sink:
//!
//! ```text
//! Pipeline::run(S) → Source::fetch() → PricingPolicy::evaluate(params, S)
//!                  → Sink::accept(result) → Sink::finish()
//! ```
//!
//! ## Modules
//!
//! - [`source`]: The [`Source`] collaborator contract
//! - [`sink`]: The [`Sink`] collaborator contract
//! - [`pipeline`]: [`Pipeline`] and its [`RunStage`] state machine
//!
//! ## Design
//!
//! Collaborators are injected at construction as generic parameters, so a
//! pipeline is statically dispatched end to end. Sources and sinks take
//! `&self` and are `Send + Sync`; a sink shared between concurrently running
//! pipelines is responsible for serialising its own output.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod pipeline;
pub mod sink;
pub mod source;

pub use pipeline::{Pipeline, RunStage, StageObserver};
pub use sink::Sink;
pub use source::Source;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::pipeline::{Pipeline, RunStage, StageObserver};
    pub use crate::sink::Sink;
    pub use crate::source::Source;
    pub use pricer_core::types::{OptionParameters, PricingError, PricingResult};
    pub use pricer_models::PricingPolicy;
}
