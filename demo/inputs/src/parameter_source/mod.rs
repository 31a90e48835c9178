//! Parameter source implementations.
//!
//! This module provides:
//! - [`StaticSource`]: a fixed parameter set held in memory
//! - [`FileSource`]: a parameter set read from a JSON file on every fetch

mod file_source;
mod static_source;

pub use file_source::FileSource;
pub use static_source::StaticSource;
