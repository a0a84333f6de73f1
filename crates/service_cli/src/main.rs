//! jumprate - Command Line Operations for Jump Rate Models
//!
//! This is the operational entry point for the jump rate model toolkit.
//!
//! # Commands
//!
//! - `jumprate eval --utilization <U>` - Borrow and supply rates at one utilisation
//! - `jumprate curve` - Rates over the utilisation grid (table, CSV or JSON)
//! - `jumprate quote --at <U>` - Interpolated read-out from the sampled curve
//! - `jumprate presets` - List the built-in parameter sets
//! - `jumprate check` - Validate the configured model
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate resolves configuration
//! and hands a validated evaluator from `rate_models` to each command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rate_models::presets::Preset;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::OutputFormat;
use config::{AppConfig, CliArgs};

/// Jump Rate Model CLI
#[derive(Parser)]
#[command(name = "jumprate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./jumprate.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Built-in parameter set (jump_rate, three_slope, separated)
    #[arg(short, long, global = true)]
    preset: Option<Preset>,

    /// Floor borrow rates at zero before deriving supply rates
    #[arg(long, global = true)]
    clamp_negative: bool,

    /// Pass negative borrow rates through, even for a clamping preset
    #[arg(long, global = true, conflicts_with = "clamp_negative")]
    no_clamp_negative: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate borrow and supply rates at one utilisation
    Eval {
        /// Utilisation in percent
        #[arg(short, long, allow_negative_numbers = true)]
        utilization: f64,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Evaluate the rate curve over [0, 100] % utilisation
    Curve {
        /// Number of grid points
        #[arg(short, long)]
        samples: Option<usize>,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// Evaluate samples on the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },

    /// Read the sampled curve at a cursor position
    Quote {
        /// Utilisation in percent
        #[arg(short, long, allow_negative_numbers = true)]
        at: f64,

        /// Number of grid points
        #[arg(short, long)]
        samples: Option<usize>,
    },

    /// List the built-in parameter sets
    Presets,

    /// Check configuration and report the resolved model
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let samples = match &cli.command {
        Commands::Curve { samples, .. } | Commands::Quote { samples, .. } => *samples,
        _ => None,
    };
    let args = CliArgs {
        config_file: cli.config.clone(),
        preset: cli.preset,
        clamp_negative: clamp_override(cli.clamp_negative, cli.no_clamp_negative),
        samples,
        verbose: cli.verbose,
    };
    let config = config::build_config(&args).context("Failed to load configuration")?;

    // Initialise tracing; RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Configuration resolved");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&mut out, cli.command, &config)?;
    out.flush()?;

    Ok(())
}

/// Clamp setting from the paired on/off flags; `None` when neither is given.
fn clamp_override(clamp: bool, no_clamp: bool) -> Option<bool> {
    if clamp {
        Some(true)
    } else if no_clamp {
        Some(false)
    } else {
        None
    }
}

fn run<W: Write>(out: &mut W, command: Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Eval {
            utilization,
            format,
        } => commands::eval::run(out, &config.to_evaluator()?, utilization, format),
        Commands::Curve {
            format, parallel, ..
        } => commands::curve::run(out, &config.to_evaluator()?, config.samples, format, parallel),
        Commands::Quote { at, .. } => {
            commands::quote::run(out, &config.to_evaluator()?, at, config.samples)
        }
        Commands::Presets => commands::presets::run(out),
        Commands::Check => commands::check::run(out, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_curve_with_globals() {
        let cli = Cli::try_parse_from([
            "jumprate",
            "--preset",
            "three_slope",
            "curve",
            "--samples",
            "50",
            "--format",
            "csv",
            "--parallel",
            "--clamp-negative",
        ])
        .unwrap();
        assert_eq!(cli.preset, Some(Preset::ThreeSlope));
        assert!(cli.clamp_negative);
        match cli.command {
            Commands::Curve {
                samples,
                format,
                parallel,
            } => {
                assert_eq!(samples, Some(50));
                assert_eq!(format, OutputFormat::Csv);
                assert!(parallel);
            }
            _ => panic!("expected curve command"),
        }
    }

    #[test]
    fn test_parse_no_clamp_negative() {
        let cli = Cli::try_parse_from([
            "jumprate",
            "--preset",
            "three_slope",
            "--no-clamp-negative",
            "check",
        ])
        .unwrap();
        assert_eq!(
            clamp_override(cli.clamp_negative, cli.no_clamp_negative),
            Some(false)
        );

        let cli = Cli::try_parse_from(["jumprate", "check"]).unwrap();
        assert_eq!(clamp_override(cli.clamp_negative, cli.no_clamp_negative), None);
    }

    #[test]
    fn test_parse_rejects_both_clamp_flags() {
        assert!(Cli::try_parse_from([
            "jumprate",
            "--clamp-negative",
            "--no-clamp-negative",
            "check"
        ])
        .is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_preset() {
        assert!(Cli::try_parse_from(["jumprate", "--preset", "aave", "check"]).is_err());
    }

    #[test]
    fn test_parse_negative_utilization() {
        let cli = Cli::try_parse_from(["jumprate", "eval", "--utilization", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::Eval { utilization, .. } if utilization == -5.0));
    }

    #[test]
    fn test_run_uses_configured_samples() {
        let config = AppConfig {
            samples: 7,
            ..Default::default()
        };
        let mut buf = Vec::new();
        let command = Commands::Curve {
            samples: None,
            format: OutputFormat::Csv,
            parallel: false,
        };
        run(&mut buf, command, &config).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 8);
    }
}
