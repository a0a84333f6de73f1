//! Model selector and static dispatch over the rate curves.
//!
//! This module provides:
//! - [`ModelKind`]: The three model families
//! - [`RateModel`]: Enum wrapping the concrete curve implementations

use num_traits::Float;
use rate_core::types::ConfigurationError;
use thiserror::Error;

use super::{RateCurve, SeparatedCurve, ThreeSlopeCurve, TwoSlopeCurve};
use crate::params::{
    ReserveFactor, SeparatedTwoSlopeParams, ThreeSlopeParams, TwoSlopeParams,
};

/// Model family selector.
///
/// # Example
///
/// ```
/// use rate_models::curves::ModelKind;
///
/// let kind: ModelKind = "three_slope".parse().unwrap();
/// assert_eq!(kind, ModelKind::ThreeSlope);
/// assert_eq!(kind.as_str(), "three_slope");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModelKind {
    /// One kink, supply derived from borrow
    TwoSlope,
    /// Two kinks, supply derived from borrow
    ThreeSlope,
    /// Independent borrow and supply two-slope curves
    SeparatedTwoSlope,
}

impl ModelKind {
    /// All model kinds.
    pub const ALL: [ModelKind; 3] = [
        ModelKind::TwoSlope,
        ModelKind::ThreeSlope,
        ModelKind::SeparatedTwoSlope,
    ];

    /// Return the string representation of the model kind.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::TwoSlope => "two_slope",
            ModelKind::ThreeSlope => "three_slope",
            ModelKind::SeparatedTwoSlope => "separated_two_slope",
        }
    }

    /// Whether the supply rate is derived from the borrow rate.
    #[inline]
    pub fn derives_supply(&self) -> bool {
        !matches!(self, ModelKind::SeparatedTwoSlope)
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unrecognised model kind name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown model kind: {0}. Supported: two_slope, three_slope, separated_two_slope")]
pub struct ParseModelKindError(pub String);

impl std::str::FromStr for ModelKind {
    type Err = ParseModelKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "two_slope" | "jump_rate" => Ok(ModelKind::TwoSlope),
            "three_slope" => Ok(ModelKind::ThreeSlope),
            "separated_two_slope" | "separated" => Ok(ModelKind::SeparatedTwoSlope),
            _ => Err(ParseModelKindError(s.to_string())),
        }
    }
}

/// Static dispatch enum wrapping the concrete rate curves.
///
/// # Example
///
/// ```
/// use rate_models::curves::{ModelKind, RateCurve, RateModel};
/// use rate_models::params::{ReserveFactor, TwoSlopeParams};
///
/// let params = TwoSlopeParams::<f64>::new(0.0, 2.5e-11, 2e-9, 80.0).unwrap();
/// let model = RateModel::two_slope(params, ReserveFactor::zero());
///
/// assert_eq!(model.kind(), ModelKind::TwoSlope);
/// assert!((model.borrow_rate(90.0) - 2.2e-8).abs() < 1e-20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum RateModel<T: Float> {
    /// Two-slope curve
    TwoSlope(TwoSlopeCurve<T>),
    /// Three-slope curve
    ThreeSlope(ThreeSlopeCurve<T>),
    /// Separated borrow and supply curves
    SeparatedTwoSlope(SeparatedCurve<T>),
}

impl<T: Float> RateModel<T> {
    /// Two-slope model from validated parameters.
    #[inline]
    pub fn two_slope(params: TwoSlopeParams<T>, reserve_factor: ReserveFactor<T>) -> Self {
        RateModel::TwoSlope(TwoSlopeCurve::new(params, reserve_factor))
    }

    /// Three-slope model from validated parameters.
    #[inline]
    pub fn three_slope(params: ThreeSlopeParams<T>, reserve_factor: ReserveFactor<T>) -> Self {
        RateModel::ThreeSlope(ThreeSlopeCurve::new(params, reserve_factor))
    }

    /// Separated model from validated parameters.
    #[inline]
    pub fn separated(params: SeparatedTwoSlopeParams<T>) -> Self {
        RateModel::SeparatedTwoSlope(SeparatedCurve::new(params))
    }

    /// Re-check the wrapped parameters.
    ///
    /// Constructors already validate; this is for parameters built field by
    /// field (for example deserialised ones).
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self {
            RateModel::TwoSlope(curve) => curve.params().validate(),
            RateModel::ThreeSlope(curve) => curve.params().validate(),
            RateModel::SeparatedTwoSlope(curve) => curve.params().validate(),
        }
    }

    /// Reserve factor, if the model derives supply from borrow.
    pub fn reserve_factor(&self) -> Option<ReserveFactor<T>> {
        match self {
            RateModel::TwoSlope(curve) => Some(curve.reserve_factor()),
            RateModel::ThreeSlope(curve) => Some(curve.reserve_factor()),
            RateModel::SeparatedTwoSlope(_) => None,
        }
    }
}

impl<T: Float> RateCurve<T> for RateModel<T> {
    #[inline]
    fn borrow_rate(&self, utilization: T) -> T {
        match self {
            RateModel::TwoSlope(curve) => curve.borrow_rate(utilization),
            RateModel::ThreeSlope(curve) => curve.borrow_rate(utilization),
            RateModel::SeparatedTwoSlope(curve) => curve.borrow_rate(utilization),
        }
    }

    #[inline]
    fn supply_rate(&self, utilization: T, borrow_rate: T) -> T {
        match self {
            RateModel::TwoSlope(curve) => curve.supply_rate(utilization, borrow_rate),
            RateModel::ThreeSlope(curve) => curve.supply_rate(utilization, borrow_rate),
            RateModel::SeparatedTwoSlope(curve) => curve.supply_rate(utilization, borrow_rate),
        }
    }

    fn kind(&self) -> ModelKind {
        match self {
            RateModel::TwoSlope(curve) => curve.kind(),
            RateModel::ThreeSlope(curve) => curve.kind(),
            RateModel::SeparatedTwoSlope(curve) => curve.kind(),
        }
    }

    fn kinks(&self) -> Vec<T> {
        match self {
            RateModel::TwoSlope(curve) => curve.kinks(),
            RateModel::ThreeSlope(curve) => curve.kinks(),
            RateModel::SeparatedTwoSlope(curve) => curve.kinks(),
        }
    }

    #[inline]
    fn rates(&self, utilization: T, clamp_negative: bool) -> (T, T) {
        match self {
            RateModel::TwoSlope(curve) => curve.rates(utilization, clamp_negative),
            RateModel::ThreeSlope(curve) => curve.rates(utilization, clamp_negative),
            RateModel::SeparatedTwoSlope(curve) => curve.rates(utilization, clamp_negative),
        }
    }
}

impl<T: Float> From<TwoSlopeCurve<T>> for RateModel<T> {
    fn from(curve: TwoSlopeCurve<T>) -> Self {
        RateModel::TwoSlope(curve)
    }
}

impl<T: Float> From<ThreeSlopeCurve<T>> for RateModel<T> {
    fn from(curve: ThreeSlopeCurve<T>) -> Self {
        RateModel::ThreeSlope(curve)
    }
}

impl<T: Float> From<SeparatedCurve<T>> for RateModel<T> {
    fn from(curve: SeparatedCurve<T>) -> Self {
        RateModel::SeparatedTwoSlope(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    // ========================================
    // ModelKind Tests
    // ========================================

    #[test]
    fn test_model_kind_parsing() {
        assert_eq!(ModelKind::from_str("two_slope").unwrap(), ModelKind::TwoSlope);
        assert_eq!(ModelKind::from_str("jump-rate").unwrap(), ModelKind::TwoSlope);
        assert_eq!(ModelKind::from_str("THREE_SLOPE").unwrap(), ModelKind::ThreeSlope);
        assert_eq!(
            ModelKind::from_str("separated").unwrap(),
            ModelKind::SeparatedTwoSlope
        );
        assert_eq!(
            ModelKind::from_str("separated-two-slope").unwrap(),
            ModelKind::SeparatedTwoSlope
        );

        let err = ModelKind::from_str("four_slope").unwrap_err();
        assert!(err.to_string().contains("four_slope"));
    }

    #[test]
    fn test_model_kind_round_trips_through_display() {
        for kind in ModelKind::ALL {
            assert_eq!(ModelKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn test_model_kind_derives_supply() {
        assert!(ModelKind::TwoSlope.derives_supply());
        assert!(ModelKind::ThreeSlope.derives_supply());
        assert!(!ModelKind::SeparatedTwoSlope.derives_supply());
    }

    // ========================================
    // RateModel Tests
    // ========================================

    fn two_slope() -> RateModel<f64> {
        let params = TwoSlopeParams::<f64>::new(0.0, 2.5e-11, 2e-9, 80.0).unwrap();
        RateModel::two_slope(params, ReserveFactor::from_percent(5.0).unwrap())
    }

    #[test]
    fn test_rate_model_delegates() {
        let model = two_slope();
        let params = TwoSlopeParams::<f64>::new(0.0, 2.5e-11, 2e-9, 80.0).unwrap();
        let curve = TwoSlopeCurve::new(params, ReserveFactor::from_percent(5.0).unwrap());

        for u in [0.0, 40.0, 80.0, 95.0] {
            assert_eq!(model.rates(u, false), curve.rates(u, false));
        }
        assert_eq!(model.kinks(), curve.kinks());
        assert_eq!(model.kind(), curve.kind());
    }

    #[test]
    fn test_rate_model_from_curves() {
        let params = ThreeSlopeParams::new(0.0, 0.0, 1e-9, 1e-8, 5.0, 85.0).unwrap();
        let model: RateModel<f64> = ThreeSlopeCurve::new(params, ReserveFactor::zero()).into();
        assert_eq!(model.kind(), ModelKind::ThreeSlope);
        assert!(model.reserve_factor().is_some());
    }

    #[test]
    fn test_separated_has_no_reserve_factor() {
        let side = TwoSlopeParams::new(0.0, 1e-9, 1e-8, 90.0).unwrap();
        let model = RateModel::separated(SeparatedTwoSlopeParams::new(side, side).unwrap());
        assert!(model.reserve_factor().is_none());
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_field_edits() {
        let mut params = ThreeSlopeParams::new(0.0, 0.0, 1e-9, 1e-8, 5.0, 85.0).unwrap();
        params.first_kink = 95.0;
        let model = RateModel::three_slope(params, ReserveFactor::zero());
        assert_eq!(
            model.validate().unwrap_err(),
            ConfigurationError::KinkOrder {
                first: 95.0,
                second: 85.0
            }
        );
    }
}
