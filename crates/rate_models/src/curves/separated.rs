//! Independent borrow and supply curves.

use num_traits::Float;

use super::{ModelKind, RateCurve};
use crate::params::SeparatedTwoSlopeParams;

/// Two uncoupled two-slope curves evaluated at the same utilisation.
///
/// The supply rate follows its own curve and is never derived from the
/// borrow rate, so there is no reserve factor.
///
/// # Example
///
/// ```
/// use rate_models::curves::{RateCurve, SeparatedCurve};
/// use rate_models::params::{SeparatedTwoSlopeParams, TwoSlopeParams};
///
/// let borrow = TwoSlopeParams::<f64>::new(1e-9, 1e-10, 1e-8, 90.0).unwrap();
/// let supply = TwoSlopeParams::new(0.0, 5e-11, 5e-9, 90.0).unwrap();
/// let curve = SeparatedCurve::new(SeparatedTwoSlopeParams::new(borrow, supply).unwrap());
///
/// let (b, s) = curve.rates(50.0, false);
/// assert!((b - (1e-9 + 50.0 * 1e-10)).abs() < 1e-20);
/// assert!((s - 50.0 * 5e-11).abs() < 1e-20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeparatedCurve<T: Float> {
    params: SeparatedTwoSlopeParams<T>,
}

impl<T: Float> SeparatedCurve<T> {
    /// Construct from validated parameters.
    #[inline]
    pub fn new(params: SeparatedTwoSlopeParams<T>) -> Self {
        Self { params }
    }

    /// Curve parameters.
    #[inline]
    pub fn params(&self) -> &SeparatedTwoSlopeParams<T> {
        &self.params
    }
}

impl<T: Float> RateCurve<T> for SeparatedCurve<T> {
    #[inline]
    fn borrow_rate(&self, utilization: T) -> T {
        self.params.borrow.rate_at(utilization)
    }

    /// Supply rate from the supply curve; `borrow_rate` is ignored.
    #[inline]
    fn supply_rate(&self, utilization: T, _borrow_rate: T) -> T {
        self.params.supply.rate_at(utilization)
    }

    fn kind(&self) -> ModelKind {
        ModelKind::SeparatedTwoSlope
    }

    fn kinks(&self) -> Vec<T> {
        let (a, b) = (self.params.borrow.kink, self.params.supply.kink);
        if a == b {
            vec![a]
        } else {
            vec![a.min(b), a.max(b)]
        }
    }

    /// Both curves are floored at zero when `clamp_negative` is set.
    fn rates(&self, utilization: T, clamp_negative: bool) -> (T, T) {
        let borrow = self.borrow_rate(utilization);
        let supply = self.supply_rate(utilization, borrow);
        if clamp_negative {
            (borrow.max(T::zero()), supply.max(T::zero()))
        } else {
            (borrow, supply)
        }
    }
}
