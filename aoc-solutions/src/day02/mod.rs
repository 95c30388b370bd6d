//! Sonar sweep: one depth per line

use aoc_harness::{AutoRegisterPuzzle, InputFormat, ItemFormat, Puzzle, SolveError};
use itertools::Itertools;
use std::fmt::Display;

#[derive(AutoRegisterPuzzle)]
#[aoc(day = 2)]
pub struct SonarSweep;

fn count_increases(depths: impl Iterator<Item = u32>) -> usize {
    depths.tuple_windows().filter(|(a, b)| b > a).count()
}

impl Puzzle for SonarSweep {
    type Input = Vec<u32>;

    fn input_format() -> InputFormat<Self::Input> {
        ItemFormat::lines().parse_items::<u32>().into_input()
    }

    fn part1(depths: Self::Input) -> Result<impl Display, SolveError> {
        Ok(count_increases(depths.into_iter()))
    }

    fn part2(depths: Self::Input) -> Result<impl Display, SolveError> {
        let windows = depths.into_iter().tuple_windows().map(|(a, b, c)| a + b + c);
        Ok(count_increases(windows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("sample");

    #[test]
    fn test_sample() {
        let depths = SonarSweep::input_format().parse(SAMPLE).unwrap();
        assert_eq!(depths.len(), 10);
        assert_eq!(SonarSweep::part1(depths.clone()).unwrap().to_string(), "7");
        assert_eq!(SonarSweep::part2(depths).unwrap().to_string(), "5");
    }

    #[test]
    fn test_bad_depth_names_line() {
        let err = SonarSweep::input_format().parse("1\n2\nx\n").unwrap_err();
        assert!(err.to_string().starts_with("Item 3:"), "{err}");
    }
}
