//! Evaluation results.

use num_traits::Float;
use rate_core::types::{annualize, apr_percent, CurveError};

/// Borrow and supply rates at one utilisation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RateResult<T: Float> {
    /// Utilisation (percent) the rates were evaluated at
    pub utilization: T,
    /// Per-unit-time borrow rate
    pub borrow_rate: T,
    /// Per-unit-time supply rate
    pub supply_rate: T,
}

impl<T: Float> RateResult<T> {
    /// Annualised borrow rate (fraction).
    #[inline]
    pub fn borrow_apr(&self) -> T {
        annualize(self.borrow_rate)
    }

    /// Annualised supply rate (fraction).
    #[inline]
    pub fn supply_apr(&self) -> T {
        annualize(self.supply_rate)
    }
}

/// Cursor read-out format: rates in scientific notation, APR in percent.
///
/// ```text
/// Utilization: 42.00%
/// Borrow Rate: 2.00e-9 (6.31%)
/// Supply Rate: 5.00e-10 (1.58%)
/// ```
impl<T: Float + std::fmt::Display + std::fmt::LowerExp> std::fmt::Display for RateResult<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Utilization: {:.2}%", self.utilization)?;
        writeln!(
            f,
            "Borrow Rate: {:.2e} ({:.2}%)",
            self.borrow_rate,
            apr_percent(self.borrow_rate)
        )?;
        write!(
            f,
            "Supply Rate: {:.2e} ({:.2}%)",
            self.supply_rate,
            apr_percent(self.supply_rate)
        )
    }
}

/// Borrow and supply rates over a utilisation sequence.
///
/// The three vectors are aligned index-for-index with the utilisation
/// samples the curve was evaluated on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RateCurvePoints<T: Float> {
    utilization: Vec<T>,
    borrow_rates: Vec<T>,
    supply_rates: Vec<T>,
}

impl<T: Float> RateCurvePoints<T> {
    /// Assemble from parallel sequences of equal length.
    pub fn new(utilization: Vec<T>, borrow_rates: Vec<T>, supply_rates: Vec<T>) -> Result<Self, CurveError> {
        if borrow_rates.len() != utilization.len() {
            return Err(CurveError::LengthMismatch {
                xs: utilization.len(),
                ys: borrow_rates.len(),
            });
        }
        if supply_rates.len() != utilization.len() {
            return Err(CurveError::LengthMismatch {
                xs: utilization.len(),
                ys: supply_rates.len(),
            });
        }
        Ok(Self {
            utilization,
            borrow_rates,
            supply_rates,
        })
    }

    pub(crate) fn from_results(results: impl IntoIterator<Item = RateResult<T>>) -> Self {
        let mut utilization = Vec::new();
        let mut borrow_rates = Vec::new();
        let mut supply_rates = Vec::new();
        for r in results {
            utilization.push(r.utilization);
            borrow_rates.push(r.borrow_rate);
            supply_rates.push(r.supply_rate);
        }
        Self {
            utilization,
            borrow_rates,
            supply_rates,
        }
    }

    /// Utilisation samples.
    #[inline]
    pub fn utilization(&self) -> &[T] {
        &self.utilization
    }

    /// Borrow rates, one per sample.
    #[inline]
    pub fn borrow_rates(&self) -> &[T] {
        &self.borrow_rates
    }

    /// Supply rates, one per sample.
    #[inline]
    pub fn supply_rates(&self) -> &[T] {
        &self.supply_rates
    }

    /// Annualised borrow rates.
    pub fn borrow_aprs(&self) -> Vec<T> {
        self.borrow_rates.iter().map(|&r| annualize(r)).collect()
    }

    /// Annualised supply rates.
    pub fn supply_aprs(&self) -> Vec<T> {
        self.supply_rates.iter().map(|&r| annualize(r)).collect()
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.utilization.len()
    }

    /// Returns true if no samples were evaluated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.utilization.is_empty()
    }

    /// The sample at `index`.
    pub fn get(&self, index: usize) -> Option<RateResult<T>> {
        Some(RateResult {
            utilization: *self.utilization.get(index)?,
            borrow_rate: *self.borrow_rates.get(index)?,
            supply_rate: *self.supply_rates.get(index)?,
        })
    }

    /// Iterate over samples in order.
    pub fn iter(&self) -> impl Iterator<Item = RateResult<T>> + '_ {
        self.utilization
            .iter()
            .zip(&self.borrow_rates)
            .zip(&self.supply_rates)
            .map(|((&utilization, &borrow_rate), &supply_rate)| RateResult {
                utilization,
                borrow_rate,
                supply_rate,
            })
    }
}
