//! # rate_core: Numeric Foundation for Jump Rate Models
//!
//! ## Foundation Layer Role
//!
//! rate_core is the bottom layer of the workspace, providing:
//! - Utilisation sampling grids (`math::sampling`)
//! - Piecewise linear interpolation over sampled curves (`math::interpolators`)
//! - Per-second to annual rate conversion (`types::rate`)
//! - Error types: `ConfigurationError`, `CurveError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other workspace crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use rate_core::math::sampling::linspace;
//! use rate_core::types::rate::{annualize, SECONDS_PER_YEAR};
//!
//! // The display grid used by the calculators: 100 points over [0, 100]
//! let grid = linspace(0.0_f64, 100.0, 100).unwrap();
//! assert_eq!(grid.len(), 100);
//! assert_eq!(grid[0], 0.0);
//! assert_eq!(grid[99], 100.0);
//!
//! // Per-second rate to APR
//! let apr = annualize(1e-9_f64);
//! # assert!((apr - 1e-9 * SECONDS_PER_YEAR).abs() < 1e-15);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
