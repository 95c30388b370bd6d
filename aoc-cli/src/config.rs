//! Configuration resolution from CLI args

use crate::cli::{Args, ReportStyle};
use crate::error::CliError;
use aoc_harness::{Day, PartSelection, Verbosity};
use std::path::{Path, PathBuf};

/// What to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Exactly one day
    Single(Day),
    /// Days 1-25 in order until the first day without a solution
    All,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Single day or batch
    pub mode: RunMode,
    /// Parts to solve
    pub parts: PartSelection,
    /// Use the sample input files
    pub sample: bool,
    /// Directory containing the dayNN/{sample,input} files
    pub inputs_dir: PathBuf,
    /// Reporter override (None = depends on mode)
    pub verbosity: Option<Verbosity>,
}

impl Config {
    /// Build config from CLI args, validating the day argument
    ///
    /// Nothing is read from disk here, so an invalid day fails before any
    /// file access.
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let mode = if args.all {
            RunMode::All
        } else {
            let raw = args.day.unwrap_or_default();
            let day = raw.parse::<Day>().map_err(|source| CliError::InvalidDay {
                value: raw,
                source,
            })?;
            RunMode::Single(day)
        };

        let inputs_dir = args
            .inputs_dir
            .map(|dir| expand_tilde(&dir))
            .unwrap_or_else(|| PathBuf::from(aoc_solutions::INPUTS_DIR));

        Ok(Config {
            mode,
            parts: PartSelection::from_flags(args.part1, args.part2),
            sample: args.sample,
            inputs_dir,
            verbosity: args.verbosity.map(|style| match style {
                ReportStyle::Terse => Verbosity::Terse,
                ReportStyle::Verbose => Verbosity::Verbose,
            }),
        })
    }

    /// Reporter style for this run
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity.unwrap_or(match self.mode {
            RunMode::Single(_) => Verbosity::Verbose,
            RunMode::All => Verbosity::Terse,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
