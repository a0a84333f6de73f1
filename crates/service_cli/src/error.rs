//! CLI error types.

use rate_core::types::{ConfigurationError, CurveError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `jumprate` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ConfigurationError),

    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
