//! Error types for structured error handling.
//!
//! This module provides:
//! - `ConfigurationError`: Invalid model parameters, detected before evaluation
//! - `CurveError`: Errors from building or querying sampled curves

use num_traits::Float;
use thiserror::Error;

/// Invalid parameter relationships or values in a rate model.
///
/// Every variant is reported when a model is constructed (or when a
/// utilisation is handed to the evaluator), never part-way through a curve.
///
/// # Variants
/// - `NonFinite`: A parameter or utilisation is NaN or infinite
/// - `NegativeKink`: A kink lies below 0 % utilisation
/// - `KinkOrder`: First kink lies above the second kink
/// - `ReserveFactorOutOfRange`: Reserve factor outside [0, 1]
///
/// # Examples
/// ```
/// use rate_core::types::ConfigurationError;
///
/// let err = ConfigurationError::KinkOrder { first: 90.0, second: 80.0 };
/// assert_eq!(
///     format!("{}", err),
///     "Kinks out of order: first kink 90 exceeds second kink 80"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A parameter is NaN or infinite.
    #[error("Non-finite value for {field}: {value}")]
    NonFinite {
        /// Name of the offending parameter
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A kink below zero utilisation.
    #[error("Negative kink for {field}: {value}")]
    NegativeKink {
        /// Name of the offending kink
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The first kink lies strictly above the second kink.
    #[error("Kinks out of order: first kink {first} exceeds second kink {second}")]
    KinkOrder {
        /// First kink (percent)
        first: f64,
        /// Second kink (percent)
        second: f64,
    },

    /// Reserve factor outside the unit interval.
    #[error("Reserve factor {value} outside [0, 1]")]
    ReserveFactorOutOfRange {
        /// The rejected fraction
        value: f64,
    },
}

/// Errors from sampling a curve or looking up a sampled curve.
///
/// # Variants
/// - `InvalidSampleCount`: A sampling grid with zero points was requested
/// - `LengthMismatch`: Parallel sequences do not line up
/// - `InsufficientData`: Not enough points to interpolate
/// - `OutOfBounds`: Strict lookup outside the sampled domain
/// - `DuplicateSample`: Two points share the same utilisation
/// - `Configuration`: Wrapped configuration error
///
/// # Examples
/// ```
/// use rate_core::types::CurveError;
///
/// let err = CurveError::OutOfBounds { x: 120.0, min: 0.0, max: 100.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Zero-length sampling grid.
    #[error("Invalid sample count: {0}")]
    InvalidSampleCount(usize),

    /// Parallel sequences of different lengths.
    #[error("Length mismatch: {xs} utilisation samples, {ys} rates")]
    LengthMismatch {
        /// Number of utilisation samples
        xs: usize,
        /// Number of rate values
        ys: usize,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Query point outside the sampled domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Repeated x-coordinate; the segment between the two points has zero width.
    #[error("Duplicate sample at {x}: sample points must be strictly increasing")]
    DuplicateSample {
        /// The repeated x-coordinate
        x: f64,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Return `value` unchanged if it is finite, otherwise a `NonFinite` error
/// naming `field`.
///
/// # Examples
/// ```
/// use rate_core::types::ensure_finite;
///
/// assert_eq!(ensure_finite("base_rate", 1e-9_f64).unwrap(), 1e-9);
/// assert!(ensure_finite("base_rate", f64::NAN).is_err());
/// ```
#[inline]
pub fn ensure_finite<T: Float>(field: &'static str, value: T) -> Result<T, ConfigurationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigurationError::NonFinite {
            field,
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}
