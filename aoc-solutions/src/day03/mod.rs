//! Inverse captcha: a single line of digits

use aoc_harness::{AutoRegisterPuzzle, InputFormat, ParseError, Puzzle, SolveError};
use std::fmt::Display;

#[derive(AutoRegisterPuzzle)]
#[aoc(day = 3)]
pub struct InverseCaptcha;

/// Sum of digits that match the digit `offset` places ahead, wrapping around
fn captcha(digits: &[u32], offset: usize) -> u32 {
    let n = digits.len();
    (0..n)
        .filter(|&i| digits[i] == digits[(i + offset) % n])
        .map(|i| digits[i])
        .sum()
}

impl Puzzle for InverseCaptcha {
    type Input = Vec<u32>;

    fn input_format() -> InputFormat<Self::Input> {
        InputFormat::whole().map_input(|text: String| {
            text.chars()
                .map(|c| {
                    c.to_digit(10)
                        .ok_or_else(|| ParseError::InvalidFormat(format!("not a digit: {c:?}")))
                })
                .collect::<Result<Vec<u32>, ParseError>>()
        })
    }

    fn part1(digits: Self::Input) -> Result<impl Display, SolveError> {
        Ok(captcha(&digits, 1))
    }

    fn part2(digits: Self::Input) -> Result<impl Display, SolveError> {
        Ok(captcha(&digits, digits.len() / 2))
    }
}
