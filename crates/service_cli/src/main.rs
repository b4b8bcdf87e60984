//! Stress CLI - Command Line Operations for Stress Test Documents
//!
//! This is the operational entry point for stress test scenario files.
//!
//! # Commands
//!
//! - `stress-cli validate <file>...` - Load files and report their stress tests
//! - `stress-cli normalise <file> [-o out]` - Rewrite a file in canonical form
//! - `stress-cli show <file> [--format table|json]` - Print a file's contents
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the A-I-P-S architecture, this crate
//! drives `adapter_xml` (document I/O) and `pricer_risk` (scenario model).

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::show::OutputFormat;
use config::CliConfig;
pub use error::{CliError, Result};

/// Stress test scenario CLI
#[derive(Parser)]
#[command(name = "stress-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "stress.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load stress test files and report their contents
    Validate {
        /// Stress test XML files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Rewrite a stress test file in canonical form
    Normalise {
        /// Stress test XML file
        file: PathBuf,

        /// Output file (defaults to output_dir from config, then stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the stress tests in a file
    Show {
        /// Stress test XML file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    init_tracing(&config, cli.verbose);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Validate { files } => commands::validate::run(&files)?,
        Commands::Normalise { file, output } => {
            commands::normalise::run(&file, output.as_deref(), &config)?
        }
        Commands::Show { file, format } => commands::show::run(&file, format)?,
    }
    Ok(())
}
