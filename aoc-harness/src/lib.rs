//! Daily Puzzle Harness Library
//!
//! Plumbing for running daily coding-puzzle solutions: each day's solution
//! declares how its input file is processed and provides a solver per part,
//! and the harness loads the input once, hands every part its own copy, and
//! reports answers with timing.
//!
//! # Overview
//!
//! This library provides:
//! - [`InputFormat`]: delimiter-based splitting with item and whole-value hooks
//! - The [`Puzzle`] trait that every solution implements
//! - [`PuzzleInstance`]: load once, solve each selected part on its own copy
//! - Terse and verbose [`Reporter`]s for console output
//! - A day-indexed [`PuzzleRegistry`] filled from link-time plugins
//!
//! # Quick Example
//!
//! ```
//! use aoc_harness::{Day, ItemFormat, InputFormat, Puzzle, RegistryBuilder, RunOptions,
//!     PartSelection, SolveError, Terse};
//! use std::fmt::Display;
//!
//! struct Sum;
//!
//! impl Puzzle for Sum {
//!     type Input = Vec<i64>;
//!
//!     fn input_format() -> InputFormat<Self::Input> {
//!         ItemFormat::lines().parse_items::<i64>().into_input()
//!     }
//!
//!     fn part1(input: Self::Input) -> Result<impl Display, SolveError> {
//!         Ok(input.iter().sum::<i64>())
//!     }
//!
//!     fn part2(input: Self::Input) -> Result<impl Display, SolveError> {
//!         Ok(input.iter().product::<i64>())
//!     }
//! }
//!
//! let dir = std::env::temp_dir().join("aoc-harness-doc");
//! std::fs::create_dir_all(dir.join("day01")).unwrap();
//! std::fs::write(dir.join("day01/sample"), "2\n3\n4\n").unwrap();
//!
//! let registry = RegistryBuilder::new().register(1, &Sum).unwrap().build();
//! let options = RunOptions { inputs_dir: dir, sample: true, parts: PartSelection::Both };
//!
//! let mut reporter = Terse::new(Vec::new());
//! let day = Day::new(1).unwrap();
//! registry.get(day).unwrap().run(day, &options, &mut reporter).unwrap();
//!
//! let out = String::from_utf8(reporter.into_inner()).unwrap();
//! assert!(out.contains("Part 1... 9 ["));
//! assert!(out.contains("Part 2... 24 ["));
//! ```
//!
//! # Registration
//!
//! Use `#[derive(AutoRegisterPuzzle)]` to register a solution at link time:
//! ```ignore
//! #[derive(AutoRegisterPuzzle)]
//! #[aoc(day = 1)]
//! struct CalorieCounting;
//! ```
//! and collect every plugin with [`RegistryBuilder::register_all_plugins`].

mod day;
mod error;
mod format;
mod instance;
mod puzzle;
mod registry;
mod report;

// Re-export public API
pub use day::{DAYS, Day};
pub use error::{
    DayError, LoadError, ParseError, RegistrationError, ResolveError, RunError, SolveError,
};
pub use format::{Delimiter, InputFormat, ItemFormat, LoadStats, Loaded};
pub use instance::{
    DynPuzzle, INPUT_FILE, PuzzleInstance, RunOptions, SAMPLE_FILE, input_path,
};
pub use puzzle::{Part, PartSelection, Puzzle};
pub use registry::{PuzzlePlugin, PuzzleRegistry, RegistryBuilder};
pub use report::{Reporter, SEPARATOR, Terse, Verbose, Verbosity, format_duration};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_harness_macros::AutoRegisterPuzzle;
