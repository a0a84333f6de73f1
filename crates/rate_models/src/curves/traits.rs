//! Rate curve trait definition.

use num_traits::Float;

use super::ModelKind;
use crate::params::ReserveFactor;

/// Supply rate paid out of a borrow rate.
///
/// Suppliers receive the borrowers' interest scaled by the share of the
/// pool that is lent out, minus the protocol's reserve cut:
///
/// ```text
/// supply = borrow * (U / 100) * (1 - reserve_factor)
/// ```
///
/// # Example
///
/// ```
/// use rate_models::curves::derive_supply_rate;
/// use rate_models::params::ReserveFactor;
///
/// let rf = ReserveFactor::from_percent(5.0_f64).unwrap();
/// let supply = derive_supply_rate(2e-9, 80.0, rf);
/// assert!((supply - 2e-9 * 0.8 * 0.95).abs() < 1e-22);
/// ```
#[inline]
pub fn derive_supply_rate<T: Float>(borrow_rate: T, utilization: T, reserve_factor: ReserveFactor<T>) -> T {
    let hundred = T::from(100.0).unwrap_or_else(T::nan);
    borrow_rate * (utilization / hundred) * reserve_factor.supplier_share()
}

/// Generic rate curve mapping utilisation to per-unit-time rates.
///
/// Implementations are pure: the same utilisation always yields the same
/// rates. Utilisation is a percentage; values outside [0, 100] are
/// extrapolated along the outer segments.
///
/// # Contract
///
/// - `borrow_rate(U)` returns the unclamped piecewise borrow rate
/// - `supply_rate(U, borrow)` returns the supply rate given the (possibly
///   clamped) borrow rate at the same utilisation
/// - `rates(U, clamp)` combines the two, applying the non-negativity clamp
///   to the borrow rate before supply is derived
pub trait RateCurve<T: Float> {
    /// Borrow rate at `utilization`, before any clamping.
    fn borrow_rate(&self, utilization: T) -> T;

    /// Supply rate at `utilization` given the borrow rate there.
    fn supply_rate(&self, utilization: T, borrow_rate: T) -> T;

    /// Which model family this curve belongs to.
    fn kind(&self) -> ModelKind;

    /// Kink utilisations in ascending order.
    fn kinks(&self) -> Vec<T>;

    /// Borrow and supply rates at `utilization`.
    ///
    /// With `clamp_negative`, the borrow rate is floored at zero before the
    /// supply rate is derived from it.
    fn rates(&self, utilization: T, clamp_negative: bool) -> (T, T) {
        let mut borrow = self.borrow_rate(utilization);
        if clamp_negative {
            borrow = borrow.max(T::zero());
        }
        let supply = self.supply_rate(utilization, borrow);
        (borrow, supply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Mock implementation for testing default methods
    struct LinearMock {
        intercept: f64,
    }

    impl RateCurve<f64> for LinearMock {
        fn borrow_rate(&self, utilization: f64) -> f64 {
            self.intercept + utilization
        }

        fn supply_rate(&self, utilization: f64, borrow_rate: f64) -> f64 {
            derive_supply_rate(borrow_rate, utilization, ReserveFactor::zero())
        }

        fn kind(&self) -> ModelKind {
            ModelKind::TwoSlope
        }

        fn kinks(&self) -> Vec<f64> {
            Vec::new()
        }
    }

    #[test]
    fn test_default_rates_without_clamp() {
        let curve = LinearMock { intercept: -60.0 };
        let (borrow, supply) = curve.rates(50.0, false);
        assert_eq!(borrow, -10.0);
        assert_relative_eq!(supply, -5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_default_rates_with_clamp() {
        let curve = LinearMock { intercept: -60.0 };
        let (borrow, supply) = curve.rates(50.0, true);
        assert_eq!(borrow, 0.0);
        assert_eq!(supply, 0.0);
    }

    #[test]
    fn test_derive_supply_rate_full_utilisation() {
        let rf = ReserveFactor::new(0.1_f64).unwrap();
        assert_relative_eq!(derive_supply_rate(1.0, 100.0, rf), 0.9, epsilon = 1e-15);
    }

    #[test]
    fn test_derive_supply_rate_zero_utilisation() {
        let rf = ReserveFactor::new(0.1_f64).unwrap();
        assert_eq!(derive_supply_rate(5.0, 0.0, rf), 0.0);
    }

    #[test]
    fn test_derive_supply_rate_full_reserve() {
        let rf = ReserveFactor::new(1.0_f64).unwrap();
        assert_eq!(derive_supply_rate(5.0, 70.0, rf), 0.0);
    }
}
