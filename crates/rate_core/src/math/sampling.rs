//! Utilisation sampling grids.
//!
//! Display curves are built from evenly spaced utilisation samples, by
//! default 100 points from 0 % to 100 % inclusive.

use crate::types::{ensure_finite, CurveError};
use num_traits::Float;

/// Lower end of the utilisation axis (percent).
pub const UTILIZATION_MIN: f64 = 0.0;

/// Upper end of the utilisation axis (percent).
pub const UTILIZATION_MAX: f64 = 100.0;

/// Default number of samples for a display curve.
pub const DEFAULT_SAMPLES: usize = 100;

/// Return `n` evenly spaced points over `[start, end]`, both ends included.
///
/// Points are computed as `start + i * step` with
/// `step = (end - start) / (n - 1)`; the last point is set to `end` exactly.
/// A single-point grid is `[start]`.
///
/// # Errors
///
/// * `CurveError::InvalidSampleCount` - `n == 0`
/// * `CurveError::Configuration` - `start` or `end` is not finite
///
/// # Examples
/// ```
/// use rate_core::math::sampling::linspace;
///
/// let grid = linspace(0.0_f64, 1.0, 5).unwrap();
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace<T: Float>(start: T, end: T, n: usize) -> Result<Vec<T>, CurveError> {
    if n == 0 {
        return Err(CurveError::InvalidSampleCount(n));
    }
    let start = ensure_finite("start", start)?;
    let end = ensure_finite("end", end)?;

    if n == 1 {
        return Ok(vec![start]);
    }

    let div = T::from(n - 1).ok_or(CurveError::InvalidSampleCount(n))?;
    let step = (end - start) / div;

    let mut grid = Vec::with_capacity(n);
    for i in 0..n - 1 {
        let i = T::from(i).ok_or(CurveError::InvalidSampleCount(n))?;
        grid.push(start + i * step);
    }
    grid.push(end);
    Ok(grid)
}

/// The standard utilisation grid: `n` points over `[0, 100]`.
///
/// # Examples
/// ```
/// use rate_core::math::sampling::utilization_grid;
///
/// let grid = utilization_grid::<f64>(100).unwrap();
/// assert_eq!(grid.len(), 100);
/// assert!((grid[1] - 100.0 / 99.0).abs() < 1e-12);
/// ```
pub fn utilization_grid<T: Float>(n: usize) -> Result<Vec<T>, CurveError> {
    let start = T::from(UTILIZATION_MIN).ok_or(CurveError::InvalidSampleCount(n))?;
    let end = T::from(UTILIZATION_MAX).ok_or(CurveError::InvalidSampleCount(n))?;
    linspace(start, end, n)
}
