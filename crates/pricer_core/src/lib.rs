//! # pricer_core: Value Types for the Black-Scholes Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option parameter and pricing result value types (`types::option`)
//! - Input validation helpers (`types::validate`)
//! - The error taxonomy shared by every layer (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derive
//! - serde: Serialisation of parameter and result values
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionParameters, PricingError};
//!
//! let params = OptionParameters::new(65.0, 0.25, 0.08, 0.3).unwrap();
//! assert_eq!(params.strike, 65.0);
//!
//! let err = OptionParameters::new(65.0, 0.0, 0.08, 0.3).unwrap_err();
//! assert!(matches!(err, PricingError::InvalidParameters { field: "expiry", .. }));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
