//! Numerical helpers for rate curves.
//!
//! - [`sampling`]: Evenly spaced utilisation grids
//! - [`interpolators`]: Linear lookup between sampled curve points

pub mod interpolators;
pub mod sampling;
