//! Dispatches one day or the whole calendar to the registered puzzles

use crate::config::{Config, RunMode};
use crate::error::CliError;
use aoc_harness::{Day, PuzzleRegistry, RunOptions};
use std::io::Write;

/// Printed between days in batch mode
pub const BATCH_SEPARATOR: &str = "--------------------------------------------------";

/// Runs puzzles from a registry according to the resolved config
pub struct Runner {
    registry: PuzzleRegistry,
    config: Config,
}

impl Runner {
    pub fn new(registry: PuzzleRegistry, config: Config) -> Self {
        Self { registry, config }
    }

    /// Run the configured day (or days), writing progress to `out`
    pub fn run(&self, out: &mut dyn Write) -> Result<(), CliError> {
        match self.config.mode {
            RunMode::Single(day) => self.run_day(day, out),
            RunMode::All => self.run_all(out),
        }
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            inputs_dir: self.config.inputs_dir.clone(),
            sample: self.config.sample,
            parts: self.config.parts,
        }
    }

    fn run_day(&self, day: Day, out: &mut dyn Write) -> Result<(), CliError> {
        let puzzle = self.registry.get(day)?;
        let mut reporter = self.config.verbosity().reporter(out);
        puzzle.run(day, &self.options(), reporter.as_mut())?;
        Ok(())
    }

    /// Every day in order until the first one without a solution
    ///
    /// A day whose input file is missing is reported and skipped; any other
    /// failure ends the batch.
    fn run_all(&self, out: &mut dyn Write) -> Result<(), CliError> {
        let options = self.options();

        if options.sample {
            writeln!(out, "\n*** USING SAMPLE DATA ***\n")?;
        }
        writeln!(out, "{BATCH_SEPARATOR}")?;

        for day in Day::all() {
            let Ok(puzzle) = self.registry.get(day) else {
                tracing::info!(day = day.get(), "no solution registered, ending batch");
                break;
            };

            writeln!(out, "== DAY {day} ==")?;
            let result = {
                let mut reporter = self.config.verbosity().reporter(&mut *out);
                puzzle.run(day, &options, reporter.as_mut())
            };

            if let Err(err) = result {
                if err.missing_input().is_none() {
                    return Err(err.into());
                }
                tracing::warn!(day = day.get(), "skipping day: {err}");
                writeln!(out, "{err}")?;
            }
            writeln!(out, "{BATCH_SEPARATOR}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_harness::{
        InputFormat, ItemFormat, PartSelection, Puzzle, RegistryBuilder, RunError, SolveError,
    };
    use std::fmt::Display;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct Count;

    impl Puzzle for Count {
        type Input = Vec<String>;

        fn input_format() -> InputFormat<Self::Input> {
            ItemFormat::lines().into_input()
        }

        fn part1(input: Self::Input) -> Result<impl Display, SolveError> {
            Ok(input.len())
        }

        fn part2(input: Self::Input) -> Result<impl Display, SolveError> {
            Ok(input.concat())
        }
    }

    struct Broken;

    impl Puzzle for Broken {
        type Input = String;

        fn input_format() -> InputFormat<Self::Input> {
            InputFormat::whole()
        }

        fn part1(_input: Self::Input) -> Result<impl Display, SolveError> {
            Err::<String, _>(SolveError::NoAnswer("nothing to find".to_string()))
        }

        fn part2(input: Self::Input) -> Result<impl Display, SolveError> {
            Ok(input)
        }
    }

    fn day(n: u8) -> Day {
        Day::new(n).unwrap()
    }

    fn write_input(dir: &Path, day: u8, file: &str, contents: &str) {
        let day_dir = dir.join(format!("day{day:02}"));
        fs::create_dir_all(&day_dir).unwrap();
        fs::write(day_dir.join(file), contents).unwrap();
    }

    fn config(dir: &Path, mode: RunMode, sample: bool) -> Config {
        Config {
            mode,
            parts: PartSelection::Both,
            sample,
            inputs_dir: dir.to_path_buf(),
            verbosity: None,
        }
    }

    fn run(runner: &Runner) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();
        let result = runner.run(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test_log::test]
    fn test_single_day_verbose() {
        let dir = TempDir::new().unwrap();
        write_input(dir.path(), 1, "sample", "a\n\nb\nc\n");

        let registry = RegistryBuilder::new().register(1, &Count).unwrap().build();
        let runner = Runner::new(registry, config(dir.path(), RunMode::Single(day(1)), true));
        let (result, out) = run(&runner);

        result.unwrap();
        assert!(out.contains("Reading **SAMPLE** input..."));
        assert!(out.contains("Raw input: 3 lines"));
        assert!(out.contains("Solution: 3 ["));
        assert!(out.contains("Solution: abc ["));
    }

    #[test_log::test]
    fn test_unregistered_day() {
        let dir = TempDir::new().unwrap();
        let registry = RegistryBuilder::new().register(1, &Count).unwrap().build();
        let runner = Runner::new(registry, config(dir.path(), RunMode::Single(day(5)), false));
        let (result, out) = run(&runner);

        let err = result.unwrap_err();
        assert!(matches!(err, CliError::Resolve(_)));
        assert_eq!(
            err.hint().as_deref(),
            Some("Has a solution been written for the day 5 puzzle yet?")
        );
        assert!(out.is_empty());
    }

    #[test_log::test]
    fn test_single_day_missing_input() {
        let dir = TempDir::new().unwrap();
        let registry = RegistryBuilder::new().register(2, &Count).unwrap().build();
        let runner = Runner::new(registry, config(dir.path(), RunMode::Single(day(2)), false));

        match run(&runner).0 {
            Err(CliError::Run(err)) => {
                assert_eq!(err.missing_input(), Some(dir.path().join("day02/input").as_path()));
            }
            other => panic!("expected missing input, got {other:?}"),
        }
    }

    #[test_log::test]
    fn test_all_stops_at_first_gap() {
        let dir = TempDir::new().unwrap();
        for n in [1, 2, 4] {
            write_input(dir.path(), n, "sample", "x\ny\n");
        }

        let registry = RegistryBuilder::new()
            .register(1, &Count)
            .unwrap()
            .register(2, &Count)
            .unwrap()
            .register(4, &Count)
            .unwrap()
            .build();
        let runner = Runner::new(registry, config(dir.path(), RunMode::All, true));
        let (result, out) = run(&runner);

        result.unwrap();
        assert!(out.starts_with("\n*** USING SAMPLE DATA ***\n"));
        assert!(out.contains("== DAY 1 =="));
        assert!(out.contains("== DAY 2 =="));
        assert!(!out.contains("== DAY 4 =="));
        assert_eq!(out.matches(BATCH_SEPARATOR).count(), 3);
        assert_eq!(out.matches("Part 1... 2 [").count(), 2);
    }

    #[test_log::test]
    fn test_all_skips_missing_input() {
        let dir = TempDir::new().unwrap();
        write_input(dir.path(), 2, "input", "only\n");

        let registry = RegistryBuilder::new()
            .register(1, &Count)
            .unwrap()
            .register(2, &Count)
            .unwrap()
            .build();
        let runner = Runner::new(registry, config(dir.path(), RunMode::All, false));
        let (result, out) = run(&runner);

        result.unwrap();
        assert!(!out.contains("SAMPLE"));
        assert!(out.contains("No input data file found (looked in"));
        assert!(out.contains("== DAY 2 =="));
        assert!(out.contains("Part 2... only ["));
    }

    #[test_log::test]
    fn test_all_propagates_solver_error() {
        let dir = TempDir::new().unwrap();
        write_input(dir.path(), 1, "input", "anything");
        write_input(dir.path(), 2, "input", "never reached");

        let registry = RegistryBuilder::new()
            .register(1, &Broken)
            .unwrap()
            .register(2, &Count)
            .unwrap()
            .build();
        let runner = Runner::new(registry, config(dir.path(), RunMode::All, false));
        let (result, out) = run(&runner);

        assert!(matches!(result, Err(CliError::Run(RunError::Solve { .. }))));
        assert!(!out.contains("== DAY 2 =="));
    }

    #[test_log::test]
    fn test_verbosity_override_in_batch() {
        let dir = TempDir::new().unwrap();
        write_input(dir.path(), 1, "input", "z\n");

        let registry = RegistryBuilder::new().register(1, &Count).unwrap().build();
        let mut config = config(dir.path(), RunMode::All, false);
        config.verbosity = Some(aoc_harness::Verbosity::Verbose);
        let (result, out) = run(&Runner::new(registry, config));

        result.unwrap();
        assert!(out.contains("Solution: 1 ["));
    }
}
