//! Interpolation over sampled curves.
//!
//! A rate curve is usually evaluated on a fixed grid and then read back at
//! arbitrary utilisation values (for example under a chart cursor). This
//! module provides the lookup side of that.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data points
//!
//! ## Core Trait
//!
//! All interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, CurveError>`: Strict lookup inside the domain
//! - `interpolate_clamped(x: T) -> T`: Lookup that holds the end values outside the domain
//! - `domain() -> (T, T)`: Return valid interpolation range
//!
//! ## Example
//!
//! ```
//! use rate_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! let xs: [f64; 3] = [0.0, 50.0, 100.0];
//! let ys = [0.0, 1.0, 4.0];
//!
//! let interp = LinearInterpolator::new(&xs, &ys).unwrap();
//! assert!((interp.interpolate(75.0).unwrap() - 2.5).abs() < 1e-12);
//! assert_eq!(interp.interpolate_clamped(150.0), 4.0);
//! ```

mod linear;
mod traits;

pub use linear::LinearInterpolator;
pub use traits::Interpolator;
