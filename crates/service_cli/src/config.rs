//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.
//!
//! A configuration selects the rate model either by preset name or by an
//! explicit `[model]` table. Kinks and reserve factors in the table are
//! percentages, rates and slopes are per second.
//!
//! ```toml
//! log_level = "info"
//! samples = 100
//! clamp_negative = false
//!
//! [model]
//! kind = "three_slope"
//! base_rate = 0.0
//! low_slope = 0.0
//! first_jump_slope = 1.585489599e-9
//! second_jump_slope = 3.4563673262e-8
//! first_kink = 5.0
//! second_kink = 85.0
//! reserve_factor = 5.0
//! ```

use rate_core::math::sampling::DEFAULT_SAMPLES;
use rate_core::types::ConfigurationError;
use rate_models::curves::RateModel;
use rate_models::evaluator::RateCurveEvaluator;
use rate_models::params::{
    ReserveFactor, SeparatedTwoSlopeParams, ThreeSlopeParams, TwoSlopeParams,
};
use rate_models::presets::{ParsePresetError, Preset};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "jumprate.toml";

/// Configuration error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid sample count: {0}. Must be an integer of at least 2")]
    InvalidSamples(String),

    #[error("Invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },

    #[error(transparent)]
    UnknownPreset(#[from] ParsePresetError),

    #[error("Both preset '{0}' and a [model] table are configured; choose one")]
    ConflictingModel(Preset),

    #[error(transparent)]
    Model(#[from] ConfigurationError),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Explicit model parameters from the `[model]` table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelConfig {
    #[serde(alias = "jump_rate")]
    TwoSlope {
        base_rate: f64,
        low_slope: f64,
        high_slope: f64,
        kink: f64,
        /// Percent, defaults to no reserve
        #[serde(default)]
        reserve_factor: f64,
    },
    ThreeSlope {
        base_rate: f64,
        low_slope: f64,
        first_jump_slope: f64,
        second_jump_slope: f64,
        first_kink: f64,
        second_kink: f64,
        /// Percent, defaults to no reserve
        #[serde(default)]
        reserve_factor: f64,
    },
    #[serde(alias = "separated")]
    SeparatedTwoSlope {
        borrow: TwoSlopeParams<f64>,
        supply: TwoSlopeParams<f64>,
    },
}

impl ModelConfig {
    /// Validate the parameters and build the model.
    pub fn to_model(&self) -> Result<RateModel<f64>, ConfigurationError> {
        match *self {
            ModelConfig::TwoSlope {
                base_rate,
                low_slope,
                high_slope,
                kink,
                reserve_factor,
            } => Ok(RateModel::two_slope(
                TwoSlopeParams::new(base_rate, low_slope, high_slope, kink)?,
                ReserveFactor::from_percent(reserve_factor)?,
            )),
            ModelConfig::ThreeSlope {
                base_rate,
                low_slope,
                first_jump_slope,
                second_jump_slope,
                first_kink,
                second_kink,
                reserve_factor,
            } => Ok(RateModel::three_slope(
                ThreeSlopeParams::new(
                    base_rate,
                    low_slope,
                    first_jump_slope,
                    second_jump_slope,
                    first_kink,
                    second_kink,
                )?,
                ReserveFactor::from_percent(reserve_factor)?,
            )),
            ModelConfig::SeparatedTwoSlope { borrow, supply } => Ok(RateModel::separated(
                SeparatedTwoSlopeParams::new(borrow, supply)?,
            )),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Points on the utilisation grid for curve output
    pub samples: usize,
    /// Floor borrow rates at zero; unset means the preset's own setting
    pub clamp_negative: Option<bool>,
    /// Built-in parameter set
    #[serde(deserialize_with = "deserialize_preset")]
    pub preset: Option<Preset>,
    /// Explicit parameters
    pub model: Option<ModelConfig>,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_preset<'de, D>(deserializer: D) -> Result<Option<Preset>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    s.map(|s| Preset::from_str(&s))
        .transpose()
        .map_err(serde::de::Error::custom)
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            samples: DEFAULT_SAMPLES,
            clamp_negative: None,
            preset: None,
            model: None,
        }
    }
}

impl AppConfig {
    /// Override fields from `JUMPRATE_*` variables resolved by `lookup`.
    ///
    /// Only variables that are set are applied.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("JUMPRATE_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Some(samples) = lookup("JUMPRATE_SAMPLES") {
            self.samples = samples
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSamples(samples.clone()))?;
        }

        if let Some(clamp) = lookup("JUMPRATE_CLAMP_NEGATIVE") {
            self.clamp_negative = Some(parse_bool("JUMPRATE_CLAMP_NEGATIVE", &clamp)?);
        }

        // A preset from a higher-priority source replaces the file's model
        if let Some(preset) = lookup("JUMPRATE_PRESET") {
            self.preset = Some(Preset::from_str(&preset)?);
            self.model = None;
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML configuration text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples < 2 {
            return Err(ConfigError::InvalidSamples(self.samples.to_string()));
        }

        match (self.preset, &self.model) {
            (Some(preset), Some(_)) => Err(ConfigError::ConflictingModel(preset)),
            (None, Some(model)) => {
                model.to_model()?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(preset) = cli.preset {
            self.preset = Some(preset);
            self.model = None;
        }
        if let Some(clamp) = cli.clamp_negative {
            self.clamp_negative = Some(clamp);
        }
        if let Some(samples) = cli.samples {
            self.samples = samples;
        }
        if cli.verbose && self.log_level != LogLevel::Trace {
            self.log_level = LogLevel::Debug;
        }
    }

    /// Preset the model comes from, if no explicit table is configured.
    pub fn effective_preset(&self) -> Option<Preset> {
        match (&self.model, self.preset) {
            (Some(_), _) => None,
            (None, preset) => Some(preset.unwrap_or(Preset::JumpRate)),
        }
    }

    /// Build the evaluator this configuration describes.
    ///
    /// Without an explicit clamp setting the preset's own choice applies;
    /// explicit `[model]` tables default to no clamping.
    pub fn to_evaluator(&self) -> Result<RateCurveEvaluator<f64>, ConfigError> {
        let (model, default_clamp) = match (&self.model, self.preset) {
            (Some(_), Some(preset)) => return Err(ConfigError::ConflictingModel(preset)),
            (Some(model), None) => (model.to_model()?, false),
            (None, preset) => {
                let preset = preset.unwrap_or(Preset::JumpRate);
                (preset.model()?, preset.clamp_negative())
            }
        };
        let clamp = self.clamp_negative.unwrap_or(default_clamp);
        Ok(RateCurveEvaluator::new(model)?.with_clamp_negative(clamp))
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Preset override
    pub preset: Option<Preset>,
    /// Clamp override: `Some(true)` floors borrow rates at zero, `Some(false)`
    /// passes negative rates through even for a clamping preset
    pub clamp_negative: Option<bool>,
    /// Sample count override
    pub samples: Option<usize>,
    /// Raise the log level to debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<AppConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

fn build_config_with<F>(cli: &CliArgs, env: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // An explicit path must exist; the default file is optional
    let mut config = match &cli.config_file {
        Some(path) => AppConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                AppConfig::from_file(default_path)?
            } else {
                AppConfig::default()
            }
        }
    };

    config.apply_env(env)?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
