//! Three-slope jump rate curve.

use num_traits::Float;

use super::{derive_supply_rate, ModelKind, RateCurve};
use crate::params::{ReserveFactor, ThreeSlopeParams};

/// Curve with two kinks ("encourage", "normal" and "discourage" slopes);
/// supply is derived from borrow.
///
/// # Example
///
/// ```
/// use rate_models::curves::{RateCurve, ThreeSlopeCurve};
/// use rate_models::params::{ReserveFactor, ThreeSlopeParams};
///
/// let params = ThreeSlopeParams::new(0.0, 0.0, 1.585489599e-9, 3.4563673262e-8, 5.0, 85.0).unwrap();
/// let curve = ThreeSlopeCurve::new(params, ReserveFactor::from_percent(5.0).unwrap());
///
/// assert_eq!(curve.borrow_rate(5.0), 0.0);
/// assert_eq!(curve.kinks(), vec![5.0, 85.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ThreeSlopeCurve<T: Float> {
    params: ThreeSlopeParams<T>,
    reserve_factor: ReserveFactor<T>,
}

impl<T: Float> ThreeSlopeCurve<T> {
    /// Construct from validated parameters.
    #[inline]
    pub fn new(params: ThreeSlopeParams<T>, reserve_factor: ReserveFactor<T>) -> Self {
        Self {
            params,
            reserve_factor,
        }
    }

    /// Curve parameters.
    #[inline]
    pub fn params(&self) -> &ThreeSlopeParams<T> {
        &self.params
    }

    /// Protocol reserve factor.
    #[inline]
    pub fn reserve_factor(&self) -> ReserveFactor<T> {
        self.reserve_factor
    }
}

impl<T: Float> RateCurve<T> for ThreeSlopeCurve<T> {
    #[inline]
    fn borrow_rate(&self, utilization: T) -> T {
        self.params.rate_at(utilization)
    }

    #[inline]
    fn supply_rate(&self, utilization: T, borrow_rate: T) -> T {
        derive_supply_rate(borrow_rate, utilization, self.reserve_factor)
    }

    fn kind(&self) -> ModelKind {
        ModelKind::ThreeSlope
    }

    fn kinks(&self) -> Vec<T> {
        vec![self.params.first_kink, self.params.second_kink]
    }
}
