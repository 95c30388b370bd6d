//! AOC CLI - Command-line interface for running daily puzzle solutions

mod cli;
mod config;
mod error;
mod runner;

// Import aoc-solutions to link the puzzle plugins
use aoc_solutions as _;

use aoc_harness::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use runner::Runner;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        if let Some(hint) = e.hint() {
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    tracing::debug!(?config, "resolved configuration");

    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    tracing::info!(puzzles = registry.len(), "registry built");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Runner::new(registry, config).run(&mut out)
}
