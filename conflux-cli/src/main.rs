//! confluxctl - run a configuration-override scenario.
//!
//! Usage:
//!   confluxctl scenario.toml [--config engine.toml] [--verbose]
//!
//! Prints a JSON report (apply outcomes, step errors, summary, final host
//! state) to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use conflux::EngineConfig;
use conflux_cli::{Scenario, run};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "confluxctl")]
#[command(about = "Resolve competing configuration overrides from a scenario file")]
struct Args {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Engine configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the report on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let scenario = Scenario::load(&args.scenario)?;
    info!(
        items = scenario.items.len(),
        exposures = scenario.expose.len(),
        proposals = scenario.propose.len(),
        "scenario loaded"
    );

    let report = run(&scenario, config)?;
    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{json}");
    Ok(())
}
