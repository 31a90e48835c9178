//! Result sink implementations.
//!
//! This module provides:
//! - [`ConsoleSink`]: `(price,delta,gamma)` lines on stdout behind a
//!   process-wide guard
//! - [`JsonLinesSink`]: one JSON object per result, appended to a file
//! - [`RecordingSink`]: in-memory capture for inspection and tests

mod console;
mod jsonl_file;
mod recording;

pub use console::{render, ConsoleSink, END_MARKER, SIGNIFICANT_DIGITS};
pub use jsonl_file::JsonLinesSink;
pub use recording::RecordingSink;
