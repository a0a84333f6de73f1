//! Interpolator trait definition.

use crate::types::CurveError;
use num_traits::Float;

/// One-dimensional interpolation over sampled data.
///
/// Generic over `T: Float` so the same lookup serves `f64` and `f32` curves.
pub trait Interpolator<T: Float> {
    /// Interpolate at `x`, failing with `CurveError::OutOfBounds` when `x`
    /// lies outside [`domain`](Interpolator::domain).
    fn interpolate(&self, x: T) -> Result<T, CurveError>;

    /// Return the `(x_min, x_max)` range covered by the data.
    fn domain(&self) -> (T, T);

    /// Interpolate at `x`, holding the first and last values outside the
    /// domain (flat extrapolation).
    fn interpolate_clamped(&self, x: T) -> T {
        let (x_min, x_max) = self.domain();
        let x = if x < x_min {
            x_min
        } else if x > x_max {
            x_max
        } else {
            x
        };
        self.interpolate(x).unwrap_or_else(|_| T::nan())
    }
}
