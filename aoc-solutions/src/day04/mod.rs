//! Lanternfish: comma separated timer values, simulated in place

use anyhow::ensure;
use aoc_harness::{AutoRegisterPuzzle, InputFormat, ItemFormat, ParseError, Puzzle, SolveError};
use std::fmt::Display;

const MAX_TIMER: usize = 8;
const RESET_TIMER: usize = 6;

/// Number of fish per timer value
type School = [u64; MAX_TIMER + 1];

#[derive(AutoRegisterPuzzle)]
#[aoc(day = 4)]
pub struct Lanternfish;

fn school(timers: Vec<usize>) -> anyhow::Result<School> {
    let mut school = School::default();
    for timer in timers {
        ensure!(timer <= MAX_TIMER, "timer {timer} exceeds {MAX_TIMER}");
        school[timer] += 1;
    }
    Ok(school)
}

fn simulate(school: &mut School, days: usize) -> u64 {
    for _ in 0..days {
        school.rotate_left(1);
        school[RESET_TIMER] += school[MAX_TIMER];
    }
    school.iter().sum()
}

impl Puzzle for Lanternfish {
    type Input = School;

    fn input_format() -> InputFormat<Self::Input> {
        ItemFormat::split(",")
            .parse_items::<usize>()
            .map_input(|timers| {
                school(timers).map_err(|e| ParseError::InvalidFormat(e.to_string()))
            })
    }

    fn part1(mut school: Self::Input) -> Result<impl Display, SolveError> {
        Ok(simulate(&mut school, 80))
    }

    fn part2(mut school: Self::Input) -> Result<impl Display, SolveError> {
        Ok(simulate(&mut school, 256))
    }
}
