//! Calorie counting: blank-line separated groups of numbers

use aoc_harness::{AutoRegisterPuzzle, InputFormat, ItemFormat, Puzzle, SolveError};
use std::fmt::Display;

#[derive(AutoRegisterPuzzle)]
#[aoc(day = 1)]
pub struct CalorieCounting;

impl Puzzle for CalorieCounting {
    /// Total calories carried by each elf
    type Input = Vec<u64>;

    fn input_format() -> InputFormat<Self::Input> {
        ItemFormat::split("\n\n")
            .map_items(|group: String| {
                group
                    .lines()
                    .map(|line| line.trim().parse::<u64>())
                    .sum::<Result<u64, _>>()
            })
            .into_input()
    }

    fn part1(totals: Self::Input) -> Result<impl Display, SolveError> {
        totals
            .into_iter()
            .max()
            .ok_or_else(|| SolveError::NoAnswer("no elves in input".to_string()))
    }

    fn part2(mut totals: Self::Input) -> Result<impl Display, SolveError> {
        if totals.len() < 3 {
            return Err(SolveError::NoAnswer(format!(
                "need at least 3 elves, found {}",
                totals.len()
            )));
        }
        totals.sort_unstable_by(|a, b| b.cmp(a));
        Ok(totals[..3].iter().sum::<u64>())
    }
}
