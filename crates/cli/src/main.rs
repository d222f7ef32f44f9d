//! # CASM Feedstock CLI
//!
//! Command-line entry point.
//!
//! Provides:
//! - Catalog loading and validation
//! - Recipe assembly for automated or local runs
//! - Hand-off of the stage graph to an engine

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use observability::ObservabilityConfig;
use tracing::info;

use cli::{Cli, Commands};
use commands::{run_info, run_recipe, run_validate};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(&cli)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "CASM feedstock CLI starting"
    );

    let result = match &cli.command {
        Commands::Run(args) => run_recipe(args),
        Commands::Validate(args) => run_validate(args),
        Commands::Info(args) => run_info(args),
    };

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Command failed");
    }

    result
}

/// Initialize logging based on CLI options
fn init_logging(cli: &Cli) -> Result<()> {
    let config = if cli.quiet {
        ObservabilityConfig {
            log_format: cli.log_format.into(),
            default_log_level: "warn".to_string(),
            force_level: true,
        }
    } else {
        let default_level = match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        ObservabilityConfig {
            log_format: cli.log_format.into(),
            default_log_level: default_level.to_string(),
            force_level: false,
        }
    };

    observability::init_with_config(config)
}
