//! # Upstream Systems
//!
//! Parameter sources feeding the option desk's pricing pipelines.
//!
//! Every source implements [`pricer_pipeline::Source`] and hands out one
//! [`pricer_core::types::OptionParameters`] per fetch.
//!
//! ## Modules
//!
//! - [`parameter_source`]: In-memory and file-backed parameter sources

pub mod parameter_source;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::parameter_source::{FileSource, StaticSource};
}
