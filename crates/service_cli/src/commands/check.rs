//! Check command implementation
//!
//! Validates the resolved configuration and prints a summary of the model
//! with its rates at the segment boundaries.

use std::io::Write;

use rate_core::math::sampling::{UTILIZATION_MAX, UTILIZATION_MIN};
use rate_models::curves::RateCurve;
use tracing::info;

use crate::config::AppConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(out: &mut W, config: &AppConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;
    let evaluator = config.to_evaluator()?;
    let model = evaluator.model();

    let source = match config.effective_preset() {
        Some(preset) => format!("preset {}", preset),
        None => "[model] table".to_string(),
    };

    writeln!(out, "Model:          {} ({})", model.kind(), source)?;
    match model.reserve_factor() {
        Some(reserve) => writeln!(out, "Reserve factor: {}%", reserve.fraction() * 100.0)?,
        None => writeln!(out, "Reserve factor: n/a (independent supply curve)")?,
    }
    writeln!(out, "Clamp negative: {}", evaluator.clamp_negative())?;
    writeln!(out, "Samples:        {}", config.samples)?;
    writeln!(out, "Log level:      {}", config.log_level)?;
    writeln!(out)?;

    let mut checkpoints = vec![UTILIZATION_MIN];
    checkpoints.extend(model.kinks());
    checkpoints.push(UTILIZATION_MAX);
    for u in checkpoints {
        writeln!(out, "{}", evaluator.evaluate(u)?)?;
    }

    info!("Configuration OK");
    Ok(())
}
