//! Built-in parameter sets.
//!
//! Typical parameter sets for each model family. Rates and
//! slopes are per second, kinks and reserve factors are percentages.

use rate_core::types::ConfigurationError;
use thiserror::Error;

use crate::curves::RateModel;
use crate::evaluator::RateCurveEvaluator;
use crate::params::{ReserveFactor, SeparatedTwoSlopeParams, ThreeSlopeParams, TwoSlopeParams};

/// A named default model.
///
/// # Example
///
/// ```
/// use rate_models::presets::Preset;
///
/// let preset: Preset = "three_slope".parse().unwrap();
/// let evaluator = preset.evaluator().unwrap();
/// assert!(evaluator.clamp_negative());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Two-slope curve with a kink at 80 %
    JumpRate,
    /// Three-slope curve with kinks at 5 % and 85 %
    ThreeSlope,
    /// Independent borrow and supply curves with kinks at 90 %
    Separated,
}

/// Unrecognised preset name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown preset: {0}. Supported: jump_rate, three_slope, separated")]
pub struct ParsePresetError(pub String);

impl Preset {
    /// All presets.
    pub const ALL: [Preset; 3] = [Preset::JumpRate, Preset::ThreeSlope, Preset::Separated];

    /// Preset name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::JumpRate => "jump_rate",
            Preset::ThreeSlope => "three_slope",
            Preset::Separated => "separated",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Preset::JumpRate => "2-slope jump rate, kink 80%, reserve 5%",
            Preset::ThreeSlope => "3-slope jump rate, kinks 5%/85%, reserve 5%, clamped",
            Preset::Separated => "separated borrow/supply curves, kinks 90%",
        }
    }

    /// Build the preset model.
    pub fn model(&self) -> Result<RateModel<f64>, ConfigurationError> {
        match self {
            Preset::JumpRate => Ok(RateModel::two_slope(
                TwoSlopeParams::new(0.0, 2.5e-11, 2e-9, 80.0)?,
                ReserveFactor::from_percent(5.0)?,
            )),
            Preset::ThreeSlope => Ok(RateModel::three_slope(
                ThreeSlopeParams::new(0.0, 0.0, 1.585489599e-9, 3.4563673262e-8, 5.0, 85.0)?,
                ReserveFactor::from_percent(5.0)?,
            )),
            Preset::Separated => Ok(RateModel::separated(SeparatedTwoSlopeParams::new(
                TwoSlopeParams::new(4.75646879e-8, 1.585489599e-9, 1.26839167935e-7, 90.0)?,
                TwoSlopeParams::new(0.0, 1.648909183e-9, 1.14155251141e-7, 90.0)?,
            )?)),
        }
    }

    /// Whether the preset floors borrow rates at zero by default.
    pub fn clamp_negative(&self) -> bool {
        matches!(self, Preset::ThreeSlope)
    }

    /// Evaluator for the preset, with its clamp setting.
    pub fn evaluator(&self) -> Result<RateCurveEvaluator<f64>, ConfigurationError> {
        Ok(RateCurveEvaluator::new(self.model()?)?.with_clamp_negative(self.clamp_negative()))
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "jump_rate" | "two_slope" => Ok(Preset::JumpRate),
            "three_slope" | "double_jump_rate" => Ok(Preset::ThreeSlope),
            "separated" | "separated_two_slope" => Ok(Preset::Separated),
            _ => Err(ParsePresetError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{ModelKind, RateCurve};
    use std::str::FromStr;

    #[test]
    fn test_all_presets_validate() {
        for preset in Preset::ALL {
            let model = preset.model().unwrap();
            assert!(model.validate().is_ok());
        }
    }

    #[test]
    fn test_preset_kinds() {
        assert_eq!(Preset::JumpRate.evaluator().unwrap().kind(), ModelKind::TwoSlope);
        assert_eq!(Preset::ThreeSlope.evaluator().unwrap().kind(), ModelKind::ThreeSlope);
        assert_eq!(Preset::Separated.evaluator().unwrap().kind(), ModelKind::SeparatedTwoSlope);
    }

    #[test]
    fn test_preset_clamp() {
        assert!(!Preset::JumpRate.evaluator().unwrap().clamp_negative());
        assert!(Preset::ThreeSlope.evaluator().unwrap().clamp_negative());
        assert!(!Preset::Separated.evaluator().unwrap().clamp_negative());
    }

    #[test]
    fn test_preset_kinks() {
        assert_eq!(Preset::JumpRate.evaluator().unwrap().model().kinks(), vec![80.0]);
        assert_eq!(Preset::ThreeSlope.evaluator().unwrap().model().kinks(), vec![5.0, 85.0]);
        assert_eq!(Preset::Separated.evaluator().unwrap().model().kinks(), vec![90.0]);
    }

    #[test]
    fn test_preset_parsing() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_str(preset.as_str()).unwrap(), preset);
        }
        assert_eq!(Preset::from_str("double-jump-rate").unwrap(), Preset::ThreeSlope);
        assert!(Preset::from_str("aave").is_err());
    }

    #[test]
    fn test_preset_descriptions_non_empty() {
        for preset in Preset::ALL {
            assert!(!preset.description().is_empty());
        }
    }
}
