//! Core rate and error types.
//!
//! This module provides:
//! - `rate`: Seconds-per-year convention and annualisation helpers
//! - `error`: Structured error types for model configuration and curve sampling
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ConfigurationError`], [`CurveError`], [`ensure_finite`] from `error`
//! - [`SECONDS_PER_YEAR`], [`annualize`], [`to_percent`] from `rate`

pub mod error;
pub mod rate;

pub use error::{ensure_finite, ConfigurationError, CurveError};
pub use rate::{annualize, apr_percent, to_percent, SECONDS_PER_YEAR};
