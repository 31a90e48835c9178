//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes call and put valuation with delta and gamma
//! - Standard normal density and cumulative distribution
//!
//! ## Design Principles
//!
//! - **No special-casing**: Formulas are evaluated as written; degenerate
//!   inputs yield NaN/Inf rather than clamped values
//! - **Numerical Accuracy**: Uses an erf-based CDF accurate to machine precision

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::{evaluate_call, evaluate_put};
pub use distributions::{cumulative, density};
