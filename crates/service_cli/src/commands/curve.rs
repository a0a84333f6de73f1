//! Curve command implementation
//!
//! Evaluates the configured model on the standard utilisation grid.

use std::io::Write;

use rate_core::math::sampling::utilization_grid;
use rate_models::curves::{RateCurve, RateModel};
use rate_models::evaluator::RateCurveEvaluator;
use serde::Serialize;
use tracing::{debug, info};

use super::{write_csv, write_table, OutputFormat, RateRow};
use crate::Result;

/// JSON document for a full curve
#[derive(Debug, Serialize)]
struct CurveReport<'a> {
    model: &'a RateModel<f64>,
    clamp_negative: bool,
    kinks: Vec<f64>,
    points: Vec<RateRow>,
}

/// Run the curve command
pub fn run<W: Write>(
    out: &mut W,
    evaluator: &RateCurveEvaluator<f64>,
    samples: usize,
    format: OutputFormat,
    parallel: bool,
) -> Result<()> {
    info!(
        "Evaluating {} curve on {} samples{}",
        evaluator.kind(),
        samples,
        if parallel { " (parallel)" } else { "" }
    );

    let grid = utilization_grid::<f64>(samples)?;
    let points = if parallel {
        evaluator.evaluate_curve_par(&grid)?
    } else {
        evaluator.evaluate_curve(&grid)?
    };
    debug!(points = points.len(), "Curve evaluated");

    let rows = points.iter().map(RateRow::from);
    match format {
        OutputFormat::Table => write_table(out, rows)?,
        OutputFormat::Csv => write_csv(&mut *out, rows)?,
        OutputFormat::Json => {
            let report = CurveReport {
                model: evaluator.model(),
                clamp_negative: evaluator.clamp_negative(),
                kinks: evaluator.model().kinks(),
                points: rows.collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    info!("Curve complete");
    Ok(())
}
