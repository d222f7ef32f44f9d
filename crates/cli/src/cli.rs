//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use contracts::ExecutionMode;
use std::path::PathBuf;

/// CASM Feedstock - soil-moisture ingestion recipe
#[derive(Parser, Debug)]
#[command(
    name = "casm-feedstock",
    author,
    version,
    about = "CASM soil-moisture ingestion recipe",
    long_about = "Assembles the CASM ingestion recipe: yearly NetCDF inputs, chunked store \n\
                  layout, provenance attributes and the final archival copy.\n\n\
                  Local runs never touch the archival target."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "CASM_FEEDSTOCK_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "CASM_FEEDSTOCK_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the recipe and hand it to an engine
    Run(RunArgs),

    /// Validate the catalog (and recipe file) without running
    Validate(ValidateArgs),

    /// Display catalog and recipe information
    Info(InfoArgs),
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Path to the catalog (YAML, TOML or JSON)
    #[arg(
        short,
        long,
        default_value = "feedstock/catalog.yaml",
        env = "CASM_FEEDSTOCK_CATALOG"
    )]
    pub catalog: PathBuf,

    /// Recipe blueprint overriding the built-in CASM defaults
    #[arg(short, long, env = "CASM_FEEDSTOCK_RECIPE")]
    pub recipe: Option<PathBuf>,

    /// Execution mode (default: automated iff GITHUB_ACTIONS=true)
    #[arg(long, value_enum, env = "CASM_FEEDSTOCK_MODE")]
    pub mode: Option<ModeArg>,

    /// Write the stage graph to this JSON manifest instead of logging it
    #[arg(long, env = "CASM_FEEDSTOCK_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Assemble and print the plan without handing it off
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the catalog to validate
    #[arg(short, long, default_value = "feedstock/catalog.yaml")]
    pub catalog: PathBuf,

    /// Recipe blueprint to validate as well
    #[arg(short, long)]
    pub recipe: Option<PathBuf>,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to the catalog
    #[arg(short, long, default_value = "feedstock/catalog.yaml")]
    pub catalog: PathBuf,

    /// Recipe blueprint overriding the built-in CASM defaults
    #[arg(short, long)]
    pub recipe: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// List every input url
    #[arg(long)]
    pub inputs: bool,
}

/// Execution mode selector
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    /// Publish to the catalog target with provenance
    Automated,
    /// Skip the final copy, no provenance
    Local,
}

impl From<ModeArg> for ExecutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Automated => ExecutionMode::Automated,
            ModeArg::Local => ExecutionMode::Local,
        }
    }
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => observability::LogFormat::Json,
            LogFormat::Pretty => observability::LogFormat::Pretty,
            LogFormat::Compact => observability::LogFormat::Compact,
        }
    }
}
