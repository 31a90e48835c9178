//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form European option valuation under Black-Scholes.
//!
//! This crate provides:
//! - Standard normal density and CDF (`analytical::distributions`)
//! - Call and put formulas returning price, delta and gamma
//!   (`analytical::black_scholes`)
//! - The [`PricingPolicy`] that lets orchestration stay formula-agnostic
//!
//! ## Design Principles
//!
//! - **Pure functions**: No state, no side effects, safe from any thread
//! - **Raw IEEE 754 semantics**: Out-of-domain inputs propagate NaN/Inf;
//!   validation belongs to the caller
//! - **Enum-based policy** for static dispatch over formulas

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod policy;

pub use policy::{ParsePolicyError, PricingPolicy};
