//! Linear interpolation implementation.

use super::Interpolator;
use crate::types::{ensure_finite, CurveError};
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Stores sorted (x, y) data points and performs linear interpolation
/// between adjacent points.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Data points are sorted by x-coordinate during construction.
/// At least 2 finite data points with distinct x-coordinates are required.
///
/// # Example
///
/// ```
/// use rate_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in same order as xs after sorting)
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y data points.
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(CurveError::LengthMismatch)` - Mismatched slice lengths
    /// * `Err(CurveError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(CurveError::Configuration)` - A NaN or infinite coordinate
    /// * `Err(CurveError::DuplicateSample)` - Two points with the same x
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, CurveError> {
        if xs.len() != ys.len() {
            return Err(CurveError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        if xs.len() < 2 {
            return Err(CurveError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        for (&x, &y) in xs.iter().zip(ys) {
            ensure_finite("x", x)?;
            ensure_finite("y", y)?;
        }

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        // Every segment needs a non-zero width
        if let Some(w) = sorted_xs.windows(2).find(|w| w[0] >= w[1]) {
            return Err(CurveError::DuplicateSample {
                x: w[1].to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
        })
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Index `i` such that `xs[i] <= x < xs[i+1]`, clamped to [0, n-2].
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);

        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate value at point `x`.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    fn interpolate(&self, x: T) -> Result<T, CurveError> {
        let (x_min, x_max) = self.domain();

        if x < x_min || x > x_max {
            return Err(CurveError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + (y1 - y0) * t)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
