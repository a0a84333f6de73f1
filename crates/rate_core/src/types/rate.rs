//! Annualisation of per-second rates.
//!
//! Lending protocols quote rates per second. Converting to an annual
//! percentage rate is a plain multiplication by the number of seconds in a
//! 365-day year:
//!
//! ```text
//! apr = rate_per_second * 31_536_000
//! ```

use num_traits::Float;

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

#[inline]
fn cast<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// Annualise a per-second rate (result is a fraction, not a percentage).
///
/// # Examples
/// ```
/// use rate_core::types::rate::annualize;
///
/// let apr = annualize(1e-9_f64);
/// assert!((apr - 0.031536).abs() < 1e-15);
/// ```
#[inline]
pub fn annualize<T: Float>(rate_per_second: T) -> T {
    rate_per_second * cast(SECONDS_PER_YEAR)
}

/// Express a fraction as a percentage.
///
/// # Examples
/// ```
/// use rate_core::types::rate::to_percent;
///
/// assert_eq!(to_percent(0.05_f64), 5.0);
/// ```
#[inline]
pub fn to_percent<T: Float>(fraction: T) -> T {
    fraction * cast(100.0)
}

/// Annualise a per-second rate and express it as a percentage.
///
/// # Examples
/// ```
/// use rate_core::types::rate::apr_percent;
///
/// assert!((apr_percent(1e-9_f64) - 3.1536).abs() < 1e-12);
/// ```
#[inline]
pub fn apr_percent<T: Float>(rate_per_second: T) -> T {
    to_percent(annualize(rate_per_second))
}
