//! Quote command implementation
//!
//! Reads the sampled curve at a cursor position, the way the rate charts
//! annotate their hover point.

use std::io::Write;

use rate_models::evaluator::RateCurveEvaluator;
use tracing::{info, warn};

use crate::Result;

/// Run the quote command
pub fn run<W: Write>(
    out: &mut W,
    evaluator: &RateCurveEvaluator<f64>,
    at: f64,
    samples: usize,
) -> Result<()> {
    info!("Quoting {} curve at {}% ({} samples)", evaluator.kind(), at, samples);

    let sampled = evaluator.sample(samples)?;
    let (min, max) = sampled.domain();
    if at < min || at > max {
        warn!("{}% outside [{}, {}]; using the nearest end sample", at, min, max);
    }

    let quote = sampled.quote_at(at)?;
    writeln!(out, "{}", quote)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rate_models::presets::Preset;

    fn render(at: f64, samples: usize) -> String {
        let evaluator = Preset::JumpRate.evaluator().unwrap();
        let mut buf = Vec::new();
        run(&mut buf, &evaluator, at, samples).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_quote_at_kink_on_coarse_grid() {
        // Grid 0, 20, ..., 100 hits the kink exactly
        let text = render(80.0, 6);
        assert_eq!(
            text,
            "Utilization: 80.00%\nBorrow Rate: 2.00e-9 (6.31%)\nSupply Rate: 1.52e-9 (4.79%)\n"
        );
    }

    #[test]
    fn test_quote_beyond_grid_is_clamped() {
        assert_eq!(
            render(150.0, 100).lines().nth(1),
            render(100.0, 100).lines().nth(1)
        );
    }
}
