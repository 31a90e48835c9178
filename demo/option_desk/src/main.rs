//! Option Desk CLI
//!
//! Entry point for pricing the configured option batch.

use anyhow::Result;
use clap::Parser;
use option_desk::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Black-Scholes option desk
#[derive(Parser)]
#[command(name = "option-desk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (defaults to demo/option_desk/config/option_desk.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON parameter file, overriding the configured parameters
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// JSON Lines output file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Price jobs in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => DeskConfig::load(path)?,
        None => DeskConfig::load_or_default()?,
    }
    .with_env_override()?;

    if let Some(params) = cli.params {
        config.option = None;
        config.parameters_file = Some(params);
    }
    if cli.output.is_some() {
        config.output_file = cli.output;
    }
    config.parallel |= cli.parallel;
    config.validate()?;

    // Initialize tracing; logs go to stderr so stdout carries only results
    let directive = config.log_level.to_lowercase();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)))
        .init();

    tracing::info!(runs = config.run_count(), "Option desk starting");

    let summary = run_desk(&config, None)?;
    tracing::info!(
        completed = summary.completed,
        duration_ms = summary.duration_ms,
        "Option desk finished"
    );

    Ok(())
}
