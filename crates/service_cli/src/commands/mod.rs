//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! report to the supplied writer; logging goes through `tracing`.

pub mod check;
pub mod curve;
pub mod eval;
pub mod presets;
pub mod quote;

use rate_models::evaluator::RateResult;
use serde::Serialize;
use thiserror::Error;

/// Output format for rate tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Unrecognised output format name.
#[derive(Debug, Error)]
#[error("Unknown format: {0}. Supported: table, csv, json")]
pub struct ParseFormatError(String);

impl std::str::FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// One output row: rates per second plus annualised percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateRow {
    /// Utilisation (percent)
    pub utilization: f64,
    /// Per-second borrow rate
    pub borrow_rate: f64,
    /// Annualised borrow rate in percent
    pub borrow_apr_percent: f64,
    /// Per-second supply rate
    pub supply_rate: f64,
    /// Annualised supply rate in percent
    pub supply_apr_percent: f64,
}

impl From<RateResult<f64>> for RateRow {
    fn from(r: RateResult<f64>) -> Self {
        Self {
            utilization: r.utilization,
            borrow_rate: r.borrow_rate,
            borrow_apr_percent: r.borrow_apr() * 100.0,
            supply_rate: r.supply_rate,
            supply_apr_percent: r.supply_apr() * 100.0,
        }
    }
}

const TABLE_TOP: &str = "┌─────────────┬─────────────┬────────────┬─────────────┬────────────┐";
const TABLE_MID: &str = "├─────────────┼─────────────┼────────────┼─────────────┼────────────┤";
const TABLE_BOTTOM: &str = "└─────────────┴─────────────┴────────────┴─────────────┴────────────┘";

/// Box-drawn table in the same layout for every command.
pub(crate) fn write_table<W: std::io::Write>(
    out: &mut W,
    rows: impl IntoIterator<Item = RateRow>,
) -> std::io::Result<()> {
    writeln!(out, "{}", TABLE_TOP)?;
    writeln!(
        out,
        "│ {:>11} │ {:>11} │ {:>10} │ {:>11} │ {:>10} │",
        "Util (%)", "Borrow/s", "Borrow APR", "Supply/s", "Supply APR"
    )?;
    writeln!(out, "{}", TABLE_MID)?;
    for row in rows {
        writeln!(
            out,
            "│ {:>11.2} │ {:>11.3e} │ {:>9.2}% │ {:>11.3e} │ {:>9.2}% │",
            row.utilization,
            row.borrow_rate,
            row.borrow_apr_percent,
            row.supply_rate,
            row.supply_apr_percent
        )?;
    }
    writeln!(out, "{}", TABLE_BOTTOM)
}

/// CSV with a header row.
pub(crate) fn write_csv<W: std::io::Write>(
    out: W,
    rows: impl IntoIterator<Item = RateRow>,
) -> crate::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
