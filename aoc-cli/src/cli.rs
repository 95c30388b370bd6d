//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output detail level
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ReportStyle {
    /// One line per part (default for --all)
    Terse,
    /// Banners and labels around each run (default for a single day)
    Verbose,
}

/// Daily puzzle runner
#[derive(Parser, Debug)]
#[command(
    name = "aoc",
    about = "Run daily puzzle solutions",
    version,
    allow_negative_numbers = true
)]
pub struct Args {
    /// Day to run (1-25)
    ///
    /// Taken as text so that a bad value is reported by the runner itself.
    pub day: Option<String>,

    /// Run every day in order, stopping at the first day without a solution
    #[arg(long)]
    pub all: bool,

    /// Use the sample input instead of the real input
    #[arg(long)]
    pub sample: bool,

    /// Run part 1 only
    #[arg(long = "part1", visible_alias = "p1")]
    pub part1: bool,

    /// Run part 2 only
    #[arg(long = "part2", visible_alias = "p2")]
    pub part2: bool,

    /// Directory containing the dayNN/{sample,input} files
    #[arg(long, env = "AOC_INPUTS_DIR")]
    pub inputs_dir: Option<PathBuf>,

    /// Output detail level (defaults depend on the run mode)
    #[arg(long, value_enum)]
    pub verbosity: Option<ReportStyle>,
}
