//! Eval command implementation
//!
//! Evaluates the configured model at a single utilisation.

use std::io::Write;

use rate_core::math::sampling::{UTILIZATION_MAX, UTILIZATION_MIN};
use rate_models::evaluator::RateCurveEvaluator;
use tracing::{info, warn};

use super::{write_csv, OutputFormat, RateRow};
use crate::Result;

/// Run the eval command
pub fn run<W: Write>(
    out: &mut W,
    evaluator: &RateCurveEvaluator<f64>,
    utilization: f64,
    format: OutputFormat,
) -> Result<()> {
    info!(
        "Evaluating {} model at {}% utilization",
        evaluator.kind(),
        utilization
    );

    if utilization.is_finite() && !(UTILIZATION_MIN..=UTILIZATION_MAX).contains(&utilization) {
        warn!(
            "Utilization {}% outside [0, 100]; extrapolating the outer segment",
            utilization
        );
    }

    let result = evaluator.evaluate(utilization)?;

    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", result)?;
        }
        OutputFormat::Csv => write_csv(&mut *out, [RateRow::from(result)])?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &RateRow::from(result))?;
            writeln!(out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use rate_models::presets::Preset;

    fn render(utilization: f64, format: OutputFormat) -> Result<String> {
        let evaluator = Preset::JumpRate.evaluator()?;
        let mut buf = Vec::new();
        run(&mut buf, &evaluator, utilization, format)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_eval_table_is_readout() {
        let text = render(90.0, OutputFormat::Table).unwrap();
        assert!(text.starts_with("Utilization: 90.00%\nBorrow Rate: 2.20e-8"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_eval_json() {
        let text = render(80.0, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["utilization"], 80.0);
        assert!((value["borrow_rate"].as_f64().unwrap() - 2e-9).abs() < 1e-20);
    }

    #[test]
    fn test_eval_csv() {
        let text = render(50.0, OutputFormat::Csv).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().nth(1).unwrap().starts_with("50.0,"));
    }

    #[test]
    fn test_eval_rejects_nan() {
        assert!(matches!(
            render(f64::NAN, OutputFormat::Table),
            Err(CliError::Model(_))
        ));
    }
}
