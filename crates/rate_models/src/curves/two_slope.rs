//! Two-slope jump rate curve.

use num_traits::Float;

use super::{derive_supply_rate, ModelKind, RateCurve};
use crate::params::{ReserveFactor, TwoSlopeParams};

/// Jump rate curve with one kink; supply is derived from borrow.
///
/// # Example
///
/// ```
/// use rate_models::curves::{RateCurve, TwoSlopeCurve};
/// use rate_models::params::{ReserveFactor, TwoSlopeParams};
///
/// let params = TwoSlopeParams::<f64>::new(0.0, 2.5e-11, 2e-9, 80.0).unwrap();
/// let curve = TwoSlopeCurve::new(params, ReserveFactor::from_percent(5.0).unwrap());
///
/// assert!((curve.borrow_rate(80.0) - 2.0e-9).abs() < 1e-20);
/// assert_eq!(curve.kinks(), vec![80.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TwoSlopeCurve<T: Float> {
    params: TwoSlopeParams<T>,
    reserve_factor: ReserveFactor<T>,
}

impl<T: Float> TwoSlopeCurve<T> {
    /// Construct from validated parameters.
    #[inline]
    pub fn new(params: TwoSlopeParams<T>, reserve_factor: ReserveFactor<T>) -> Self {
        Self {
            params,
            reserve_factor,
        }
    }

    /// Curve parameters.
    #[inline]
    pub fn params(&self) -> &TwoSlopeParams<T> {
        &self.params
    }

    /// Protocol reserve factor.
    #[inline]
    pub fn reserve_factor(&self) -> ReserveFactor<T> {
        self.reserve_factor
    }
}

impl<T: Float> RateCurve<T> for TwoSlopeCurve<T> {
    #[inline]
    fn borrow_rate(&self, utilization: T) -> T {
        self.params.rate_at(utilization)
    }

    #[inline]
    fn supply_rate(&self, utilization: T, borrow_rate: T) -> T {
        derive_supply_rate(borrow_rate, utilization, self.reserve_factor)
    }

    fn kind(&self) -> ModelKind {
        ModelKind::TwoSlope
    }

    fn kinks(&self) -> Vec<T> {
        vec![self.params.kink]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario_curve() -> TwoSlopeCurve<f64> {
        let params = TwoSlopeParams::<f64>::new(0.0, 2.5e-11, 2e-9, 80.0).unwrap();
        TwoSlopeCurve::new(params, ReserveFactor::from_percent(5.0).unwrap())
    }

    #[test]
    fn test_borrow_rate_at_kink() {
        assert_relative_eq!(scenario_curve().borrow_rate(80.0), 2.0e-9, max_relative = 1e-12);
    }

    #[test]
    fn test_borrow_rate_above_kink() {
        assert_relative_eq!(scenario_curve().borrow_rate(90.0), 2.2e-8, max_relative = 1e-12);
    }

    #[test]
    fn test_supply_rate_derived_from_borrow() {
        let curve = scenario_curve();
        let (borrow, supply) = curve.rates(90.0, false);
        assert_relative_eq!(supply, borrow * 0.9 * 0.95, max_relative = 1e-12);
    }

    #[test]
    fn test_extrapolates_outside_unit_range() {
        let curve = scenario_curve();
        assert_relative_eq!(curve.borrow_rate(-10.0), -2.5e-10, max_relative = 1e-12);
        assert_relative_eq!(curve.borrow_rate(110.0), 2.0e-9 + 30.0 * 2e-9, max_relative = 1e-12);
    }

    #[test]
    fn test_clamp_floors_negative_base() {
        let params = TwoSlopeParams::new(-1e-9, 1e-11, 1e-9, 80.0).unwrap();
        let curve = TwoSlopeCurve::new(params, ReserveFactor::zero());

        let (borrow, supply) = curve.rates(10.0, true);
        assert_eq!(borrow, 0.0);
        assert_eq!(supply, 0.0);

        let (borrow, supply) = curve.rates(10.0, false);
        assert!(borrow < 0.0);
        assert!(supply < 0.0);
    }

    #[test]
    fn test_kind_and_accessors() {
        let curve = scenario_curve();
        assert_eq!(curve.kind(), ModelKind::TwoSlope);
        assert_eq!(curve.params().kink, 80.0);
        assert_relative_eq!(curve.reserve_factor().fraction(), 0.05, max_relative = 1e-12);
    }
}
