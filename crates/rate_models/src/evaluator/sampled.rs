//! Sampled curves and cursor read-outs.
//!
//! A display curve is evaluated once on a grid. Reading it back between
//! grid points interpolates linearly between neighbouring samples and holds
//! the end values outside the grid, so the read-out matches what a chart
//! drawn from the samples shows.

use num_traits::Float;
use rate_core::math::interpolators::{Interpolator, LinearInterpolator};
use rate_core::types::{ensure_finite, ConfigurationError, CurveError};

use super::{RateCurvePoints, RateResult};

/// A rate curve evaluated on a utilisation grid.
///
/// # Example
///
/// ```
/// use rate_models::presets::Preset;
///
/// let evaluator = Preset::JumpRate.evaluator().unwrap();
/// let sampled = evaluator.sample(100).unwrap();
///
/// let quote = sampled.quote_at(42.0).unwrap();
/// assert_eq!(quote.utilization, 42.0);
/// ```
#[derive(Debug, Clone)]
pub struct SampledCurve<T: Float> {
    points: RateCurvePoints<T>,
    borrow: LinearInterpolator<T>,
    supply: LinearInterpolator<T>,
}

impl<T: Float> SampledCurve<T> {
    /// Build lookups over evaluated points.
    ///
    /// Needs at least 2 samples at distinct utilisations.
    pub fn new(points: RateCurvePoints<T>) -> Result<Self, CurveError> {
        let borrow = LinearInterpolator::new(points.utilization(), points.borrow_rates())?;
        let supply = LinearInterpolator::new(points.utilization(), points.supply_rates())?;
        Ok(Self {
            points,
            borrow,
            supply,
        })
    }

    /// The evaluated samples.
    #[inline]
    pub fn points(&self) -> &RateCurvePoints<T> {
        &self.points
    }

    /// Utilisation range covered by the samples.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        self.borrow.domain()
    }

    /// Read the sampled curve at `utilization`.
    ///
    /// Values between samples are interpolated linearly; values outside
    /// the sampled range take the nearest end sample.
    pub fn quote_at(&self, utilization: T) -> Result<RateResult<T>, ConfigurationError> {
        let utilization = ensure_finite("utilization", utilization)?;
        Ok(RateResult {
            utilization,
            borrow_rate: self.borrow.interpolate_clamped(utilization),
            supply_rate: self.supply.interpolate_clamped(utilization),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points() -> RateCurvePoints<f64> {
        RateCurvePoints::new(
            vec![0.0, 50.0, 100.0],
            vec![1.0, 2.0, 10.0],
            vec![0.0, 1.0, 9.0],
        )
        .unwrap()
    }

    #[test]
    fn test_quote_between_samples() {
        let sampled = SampledCurve::new(points()).unwrap();
        let q = sampled.quote_at(75.0).unwrap();
        assert_relative_eq!(q.borrow_rate, 6.0, epsilon = 1e-12);
        assert_relative_eq!(q.supply_rate, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quote_on_sample() {
        let sampled = SampledCurve::new(points()).unwrap();
        let q = sampled.quote_at(50.0).unwrap();
        assert_eq!((q.borrow_rate, q.supply_rate), (2.0, 1.0));
    }

    #[test]
    fn test_quote_outside_holds_end_values() {
        let sampled = SampledCurve::new(points()).unwrap();
        let below = sampled.quote_at(-5.0).unwrap();
        let above = sampled.quote_at(105.0).unwrap();
        assert_eq!(below.utilization, -5.0);
        assert_eq!((below.borrow_rate, below.supply_rate), (1.0, 0.0));
        assert_eq!((above.borrow_rate, above.supply_rate), (10.0, 9.0));
    }

    #[test]
    fn test_quote_rejects_non_finite() {
        let sampled = SampledCurve::new(points()).unwrap();
        assert!(matches!(
            sampled.quote_at(f64::NAN),
            Err(ConfigurationError::NonFinite {
                field: "utilization",
                ..
            })
        ));
    }

    #[test]
    fn test_needs_two_samples() {
        let single = RateCurvePoints::new(vec![0.0_f64], vec![1.0], vec![0.5]).unwrap();
        assert_eq!(
            SampledCurve::new(single).unwrap_err(),
            CurveError::InsufficientData { got: 1, need: 2 }
        );
    }

    #[test]
    fn test_repeated_utilisation_rejected() {
        let evaluator = crate::presets::Preset::JumpRate.evaluator().unwrap();
        let points = evaluator.evaluate_curve(&[0.0, 50.0, 50.0]).unwrap();
        assert_eq!(
            SampledCurve::new(points).unwrap_err(),
            CurveError::DuplicateSample { x: 50.0 }
        );
    }

    #[test]
    fn test_domain() {
        let sampled = SampledCurve::new(points()).unwrap();
        assert_eq!(sampled.domain(), (0.0, 100.0));
        assert_eq!(sampled.points().len(), 3);
    }
}
