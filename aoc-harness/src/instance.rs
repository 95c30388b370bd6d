//! Puzzle instance: loads the input once and runs the selected parts

use crate::day::Day;
use crate::error::{RunError, SolveError};
use crate::format::Loaded;
use crate::puzzle::{Part, PartSelection, Puzzle};
use crate::report::Reporter;
use chrono::Utc;
use std::any::type_name;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// File name of the sample input inside a day's directory
pub const SAMPLE_FILE: &str = "sample";
/// File name of the real input inside a day's directory
pub const INPUT_FILE: &str = "input";

/// Path of a day's input file: `{inputs_dir}/dayNN/{sample|input}`
pub fn input_path(inputs_dir: &Path, day: Day, sample: bool) -> PathBuf {
    let file = if sample { SAMPLE_FILE } else { INPUT_FILE };
    inputs_dir.join(day.dir_name()).join(file)
}

/// Settings shared by every puzzle run in one invocation
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory containing the `dayNN` input directories
    pub inputs_dir: PathBuf,
    /// Use the sample input instead of the real one
    pub sample: bool,
    /// Parts to solve
    pub parts: PartSelection,
}

/// A single run of puzzle `P` against one input file
///
/// Created fresh for each run. The input is loaded at most once; every part
/// receives its own clone of it.
pub struct PuzzleInstance<'r, P: Puzzle> {
    day: Day,
    sample: bool,
    input_path: PathBuf,
    reporter: &'r mut dyn Reporter,
    puzzle: PhantomData<fn() -> P>,
}

impl<'r, P: Puzzle> PuzzleInstance<'r, P> {
    /// Create an instance reading from the day's `sample` or `input` file
    pub fn new(day: Day, inputs_dir: &Path, sample: bool, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            day,
            sample,
            input_path: input_path(inputs_dir, day, sample),
            reporter,
            puzzle: PhantomData,
        }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn sample(&self) -> bool {
        self.sample
    }

    /// The file this instance reads its input from
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Load and process the input file, reporting what was loaded
    pub fn get_input(&mut self) -> Result<P::Input, RunError> {
        let Loaded { value, stats } = P::input_format().load(&self.input_path)?;
        self.reporter.input_loaded(&stats)?;
        Ok(value)
    }

    /// Solve both parts
    pub fn solve(&mut self) -> Result<(), RunError> {
        self.solve_parts(PartSelection::Both)
    }

    /// Solve part 1 only
    pub fn solve_part1(&mut self) -> Result<(), RunError> {
        self.solve_parts(PartSelection::Part1)
    }

    /// Solve part 2 only
    pub fn solve_part2(&mut self) -> Result<(), RunError> {
        self.solve_parts(PartSelection::Part2)
    }

    /// Load the input, then solve each selected part against its own copy
    ///
    /// A solver error aborts the run; later parts are not attempted.
    pub fn solve_parts(&mut self, parts: PartSelection) -> Result<(), RunError> {
        self.reporter.reading_input(self.sample)?;
        let input = self.get_input()?;

        for &part in parts.parts() {
            let part_input = input.clone();
            self.reporter.solving(part)?;

            let solve_start = Utc::now();
            let answer = solve_part::<P>(part, part_input)
                .map_err(|source| RunError::Solve { part, source })?;
            let elapsed = Utc::now() - solve_start;

            tracing::debug!(
                day = self.day.get(),
                part = part.number(),
                elapsed_us = elapsed.num_microseconds(),
                "solved"
            );
            self.reporter.solved(part, &answer, elapsed)?;
        }

        self.reporter.finished()?;
        Ok(())
    }
}

fn solve_part<P: Puzzle>(part: Part, input: P::Input) -> Result<String, SolveError> {
    Ok(match part {
        Part::One => P::part1(input)?.to_string(),
        Part::Two => P::part2(input)?.to_string(),
    })
}

/// Type-erased interface for running any puzzle through dynamic dispatch
///
/// Every `P: Puzzle` implements this through a blanket impl, which is what
/// lets the registry hold different puzzle types side by side.
pub trait DynPuzzle: Sync {
    /// Construct a fresh instance for `day` and solve the selected parts
    fn run(
        &self,
        day: Day,
        options: &RunOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<(), RunError>;

    /// Name of the implementing type, for diagnostics
    fn name(&self) -> &'static str;
}

impl<P> DynPuzzle for P
where
    P: Puzzle + Sync,
{
    fn run(
        &self,
        day: Day,
        options: &RunOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<(), RunError> {
        tracing::info!(
            day = day.get(),
            puzzle = self.name(),
            sample = options.sample,
            "running"
        );
        PuzzleInstance::<P>::new(day, &options.inputs_dir, options.sample, reporter)
            .solve_parts(options.parts)
    }

    fn name(&self) -> &'static str {
        type_name::<P>()
    }
}
