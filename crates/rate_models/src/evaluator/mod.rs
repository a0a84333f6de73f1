//! Rate curve evaluation.
//!
//! This module provides:
//! - [`RateCurveEvaluator`]: A validated model plus the non-negativity flag
//! - [`RateResult`]: Borrow and supply rates at one utilisation
//! - [`RateCurvePoints`]: Parallel rate sequences over a utilisation grid
//! - [`SampledCurve`]: Evaluated grid with interpolated read-outs
//!
//! ## Purity
//!
//! The evaluator holds no mutable state. Evaluating the same utilisation
//! sequence twice, or in parallel, yields bit-identical results.

mod result;
mod sampled;

pub use result::{RateCurvePoints, RateResult};
pub use sampled::SampledCurve;

use num_traits::Float;
use rate_core::math::sampling::utilization_grid;
use rate_core::types::{ensure_finite, ConfigurationError, CurveError};
use rayon::prelude::*;

use crate::curves::{ModelKind, RateCurve, RateModel};

/// Maps utilisation to borrow and supply rates for one model.
///
/// # Example
///
/// ```
/// use rate_models::curves::RateModel;
/// use rate_models::evaluator::RateCurveEvaluator;
/// use rate_models::params::{ReserveFactor, ThreeSlopeParams};
///
/// let params = ThreeSlopeParams::new(0.0, 0.0, 1.585489599e-9, 3.4563673262e-8, 5.0, 85.0).unwrap();
/// let evaluator = RateCurveEvaluator::new(RateModel::three_slope(params, ReserveFactor::zero()))
///     .unwrap()
///     .with_clamp_negative(true);
///
/// let curve = evaluator.sample(100).unwrap();
/// assert_eq!(curve.points().len(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateCurveEvaluator<T: Float> {
    model: RateModel<T>,
    clamp_negative: bool,
}

impl<T: Float> RateCurveEvaluator<T> {
    /// Wrap a model. Negative borrow rates are passed through unchanged.
    ///
    /// Parameter fields are public, so the model is re-checked here; a model
    /// assembled from unchecked fields is rejected before any evaluation.
    pub fn new(model: RateModel<T>) -> Result<Self, ConfigurationError> {
        model.validate()?;
        Ok(Self {
            model,
            clamp_negative: false,
        })
    }

    /// Floor borrow rates at zero before supply rates are derived.
    #[inline]
    pub fn with_clamp_negative(mut self, clamp_negative: bool) -> Self {
        self.clamp_negative = clamp_negative;
        self
    }

    /// The wrapped model.
    #[inline]
    pub fn model(&self) -> &RateModel<T> {
        &self.model
    }

    /// Model family.
    #[inline]
    pub fn kind(&self) -> ModelKind {
        self.model.kind()
    }

    /// Whether negative borrow rates are floored at zero.
    #[inline]
    pub fn clamp_negative(&self) -> bool {
        self.clamp_negative
    }

    /// Rates at one utilisation.
    ///
    /// Utilisation outside [0, 100] is extrapolated; NaN or infinite
    /// utilisation is rejected.
    pub fn evaluate(&self, utilization: T) -> Result<RateResult<T>, ConfigurationError> {
        let utilization = ensure_finite("utilization", utilization)?;
        Ok(self.evaluate_unchecked(utilization))
    }

    #[inline]
    fn evaluate_unchecked(&self, utilization: T) -> RateResult<T> {
        let (borrow_rate, supply_rate) = self.model.rates(utilization, self.clamp_negative);
        RateResult {
            utilization,
            borrow_rate,
            supply_rate,
        }
    }

    /// Rates over a utilisation sequence, aligned index-for-index.
    ///
    /// Every sample is checked before any is evaluated.
    pub fn evaluate_curve(&self, utilization: &[T]) -> Result<RateCurvePoints<T>, ConfigurationError> {
        for &u in utilization {
            ensure_finite("utilization", u)?;
        }
        Ok(RateCurvePoints::from_results(
            utilization.iter().map(|&u| self.evaluate_unchecked(u)),
        ))
    }

    /// Rates on the standard grid of `n` points over [0, 100].
    pub fn sample(&self, n: usize) -> Result<SampledCurve<T>, CurveError> {
        let grid = utilization_grid(n)?;
        let points = self.evaluate_curve(&grid)?;
        SampledCurve::new(points)
    }
}

impl<T: Float + Send + Sync> RateCurveEvaluator<T> {
    /// Same as [`evaluate_curve`](Self::evaluate_curve), computed on the
    /// rayon thread pool. Samples are independent, so the output is
    /// identical to the sequential one.
    pub fn evaluate_curve_par(&self, utilization: &[T]) -> Result<RateCurvePoints<T>, ConfigurationError> {
        utilization
            .par_iter()
            .try_for_each(|&u| ensure_finite("utilization", u).map(|_| ()))?;
        let results: Vec<RateResult<T>> = utilization
            .par_iter()
            .map(|&u| self.evaluate_unchecked(u))
            .collect();
        Ok(RateCurvePoints::from_results(results))
    }
}
