//! # Option Desk Demo Orchestrator
//!
//! Prices European calls and puts under Black-Scholes over a ladder of
//! underlying prices, one pipeline run per (policy, underlying) pair.
//!
//! ## Features
//!
//! - **Configurable batch**: policies, spot ladder and parameters from TOML
//!   with environment overrides
//! - **Parallel pricing**: jobs fan out over the rayon pool against a shared,
//!   line-serialised console sink
//! - **Pluggable collaborators**: textbook, inline or file-backed parameters;
//!   console or JSON Lines output
//!
//! With the default configuration the desk prints the call and the put on
//! the textbook contract at S = 60, each followed by an `end` line.

pub mod config;
pub mod error;
pub mod workflow;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, DeskConfig};
    pub use crate::error::DeskError;
    pub use crate::workflow::{
        run_desk, BatchSummary, JobFailure, PricingBatch, PricingJob, ProgressCallback,
    };
}
