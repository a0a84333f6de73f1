//! Rate model parameter sets.
//!
//! All rates and slopes are per unit of time (per second for on-chain
//! models). Slopes are per percentage point of utilisation, and kinks are
//! utilisation percentages.
//!
//! Constructors validate their inputs and return a
//! [`ConfigurationError`] before any evaluation takes place:
//! - every value must be finite
//! - kinks must be non-negative
//! - `first_kink <= second_kink` for three-slope models
//! - reserve factors must lie in [0, 1]

use num_traits::Float;
use rate_core::types::{ensure_finite, ConfigurationError};

#[inline]
fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

fn ensure_kink<T: Float>(field: &'static str, kink: T) -> Result<T, ConfigurationError> {
    let kink = ensure_finite(field, kink)?;
    if kink < T::zero() {
        return Err(ConfigurationError::NegativeKink {
            field,
            value: to_f64(kink),
        });
    }
    Ok(kink)
}

/// Parameters of the two-segment ("jump rate") curve.
///
/// ```text
/// rate(U) = base + U * low                        if U <= kink
///         = base + kink * low + (U - kink) * high if U >  kink
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoSlopeParams<T: Float> {
    /// Rate at zero utilisation
    pub base_rate: T,
    /// Slope up to and including the kink
    pub low_slope: T,
    /// Slope above the kink
    pub high_slope: T,
    /// Utilisation (percent) where the slope changes
    pub kink: T,
}

impl<T: Float> TwoSlopeParams<T> {
    /// Create validated two-slope parameters.
    ///
    /// # Examples
    /// ```
    /// use rate_models::params::TwoSlopeParams;
    ///
    /// let params = TwoSlopeParams::new(0.0, 2.5e-11, 2e-9, 80.0).unwrap();
    /// assert_eq!(params.kink, 80.0);
    ///
    /// assert!(TwoSlopeParams::new(0.0, 2.5e-11, 2e-9, -1.0).is_err());
    /// ```
    pub fn new(base_rate: T, low_slope: T, high_slope: T, kink: T) -> Result<Self, ConfigurationError> {
        let params = Self {
            base_rate,
            low_slope,
            high_slope,
            kink,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the parameter values.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        ensure_finite("base_rate", self.base_rate)?;
        ensure_finite("low_slope", self.low_slope)?;
        ensure_finite("high_slope", self.high_slope)?;
        ensure_kink("kink", self.kink)?;
        Ok(())
    }

    /// Evaluate the curve at `utilization`.
    ///
    /// The upper segment starts at the lower segment's value at the kink,
    /// so the curve is continuous there.
    #[inline]
    pub fn rate_at(&self, utilization: T) -> T {
        if utilization <= self.kink {
            self.base_rate + utilization * self.low_slope
        } else {
            self.base_rate + self.kink * self.low_slope + (utilization - self.kink) * self.high_slope
        }
    }

    /// Slope of the segment containing `utilization`.
    #[inline]
    pub fn slope_at(&self, utilization: T) -> T {
        if utilization <= self.kink {
            self.low_slope
        } else {
            self.high_slope
        }
    }
}

/// Parameters of the three-segment curve.
///
/// Segments are `U <= first_kink`, `first_kink < U <= second_kink` and
/// `U > second_kink`. Each segment starts where the previous one ends.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreeSlopeParams<T: Float> {
    /// Rate at zero utilisation
    pub base_rate: T,
    /// Slope up to and including the first kink
    pub low_slope: T,
    /// Slope between the kinks
    pub first_jump_slope: T,
    /// Slope above the second kink
    pub second_jump_slope: T,
    /// First kink (percent)
    pub first_kink: T,
    /// Second kink (percent)
    pub second_kink: T,
}

impl<T: Float> ThreeSlopeParams<T> {
    /// Create validated three-slope parameters.
    ///
    /// # Examples
    /// ```
    /// use rate_models::params::ThreeSlopeParams;
    /// use rate_core::types::ConfigurationError;
    ///
    /// let ok = ThreeSlopeParams::new(0.0, 0.0, 1.5e-9, 3.4e-8, 5.0, 85.0);
    /// assert!(ok.is_ok());
    ///
    /// let err = ThreeSlopeParams::new(0.0, 0.0, 1.5e-9, 3.4e-8, 85.0, 5.0).unwrap_err();
    /// assert_eq!(err, ConfigurationError::KinkOrder { first: 85.0, second: 5.0 });
    /// ```
    pub fn new(
        base_rate: T,
        low_slope: T,
        first_jump_slope: T,
        second_jump_slope: T,
        first_kink: T,
        second_kink: T,
    ) -> Result<Self, ConfigurationError> {
        let params = Self {
            base_rate,
            low_slope,
            first_jump_slope,
            second_jump_slope,
            first_kink,
            second_kink,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the parameter values and the kink ordering.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        ensure_finite("base_rate", self.base_rate)?;
        ensure_finite("low_slope", self.low_slope)?;
        ensure_finite("first_jump_slope", self.first_jump_slope)?;
        ensure_finite("second_jump_slope", self.second_jump_slope)?;
        let first = ensure_kink("first_kink", self.first_kink)?;
        let second = ensure_kink("second_kink", self.second_kink)?;
        if first > second {
            return Err(ConfigurationError::KinkOrder {
                first: to_f64(first),
                second: to_f64(second),
            });
        }
        Ok(())
    }

    /// Evaluate the curve at `utilization`.
    #[inline]
    pub fn rate_at(&self, utilization: T) -> T {
        let at_first_kink = self.base_rate + self.first_kink * self.low_slope;
        if utilization <= self.first_kink {
            self.base_rate + utilization * self.low_slope
        } else if utilization <= self.second_kink {
            at_first_kink + (utilization - self.first_kink) * self.first_jump_slope
        } else {
            let at_second_kink =
                at_first_kink + (self.second_kink - self.first_kink) * self.first_jump_slope;
            at_second_kink + (utilization - self.second_kink) * self.second_jump_slope
        }
    }

    /// Slope of the segment containing `utilization`.
    #[inline]
    pub fn slope_at(&self, utilization: T) -> T {
        if utilization <= self.first_kink {
            self.low_slope
        } else if utilization <= self.second_kink {
            self.first_jump_slope
        } else {
            self.second_jump_slope
        }
    }
}

/// Independent borrow and supply two-slope curves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeparatedTwoSlopeParams<T: Float> {
    /// Borrow curve
    pub borrow: TwoSlopeParams<T>,
    /// Supply curve
    pub supply: TwoSlopeParams<T>,
}

impl<T: Float> SeparatedTwoSlopeParams<T> {
    /// Pair two validated curves.
    pub fn new(borrow: TwoSlopeParams<T>, supply: TwoSlopeParams<T>) -> Result<Self, ConfigurationError> {
        let params = Self { borrow, supply };
        params.validate()?;
        Ok(params)
    }

    /// Check both curves.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.borrow.validate()?;
        self.supply.validate()
    }
}

/// Share of borrower interest kept by the protocol, as a fraction in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReserveFactor<T: Float>(T);

impl<T: Float> ReserveFactor<T> {
    /// Create a reserve factor from a fraction.
    ///
    /// # Examples
    /// ```
    /// use rate_models::params::ReserveFactor;
    ///
    /// assert_eq!(ReserveFactor::new(0.05_f64).unwrap().fraction(), 0.05);
    /// assert!(ReserveFactor::new(1.5_f64).is_err());
    /// ```
    pub fn new(fraction: T) -> Result<Self, ConfigurationError> {
        let fraction = ensure_finite("reserve_factor", fraction)?;
        if fraction < T::zero() || fraction > T::one() {
            return Err(ConfigurationError::ReserveFactorOutOfRange {
                value: to_f64(fraction),
            });
        }
        Ok(Self(fraction))
    }

    /// Create a reserve factor from a percentage (0–100).
    ///
    /// # Examples
    /// ```
    /// use rate_models::params::ReserveFactor;
    ///
    /// let rf = ReserveFactor::from_percent(5.0_f64).unwrap();
    /// assert!((rf.fraction() - 0.05).abs() < 1e-15);
    /// ```
    pub fn from_percent(percent: T) -> Result<Self, ConfigurationError> {
        let percent = ensure_finite("reserve_factor", percent)?;
        let hundred = T::from(100.0).unwrap_or_else(T::nan);
        Self::new(percent / hundred)
    }

    /// No reserve: suppliers receive all borrower interest.
    pub fn zero() -> Self {
        Self(T::zero())
    }

    /// The fraction in [0, 1].
    #[inline]
    pub fn fraction(&self) -> T {
        self.0
    }

    /// Share passed on to suppliers, `1 - fraction`.
    #[inline]
    pub fn supplier_share(&self) -> T {
        T::one() - self.0
    }
}

impl<T: Float> Default for ReserveFactor<T> {
    fn default() -> Self {
        Self::zero()
    }
}
