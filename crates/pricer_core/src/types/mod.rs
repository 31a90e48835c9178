//! Core value and error types.
//!
//! This module provides:
//! - `option`: [`OptionParameters`] and [`PricingResult`] value types
//! - `validate`: Positivity and finiteness checks for pricing inputs
//! - `error`: The [`PricingError`] taxonomy
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod error;
pub mod option;
pub mod validate;

pub use error::PricingError;
pub use option::{OptionParameters, PricingResult};
pub use validate::validate_underlying;
