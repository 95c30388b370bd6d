//! Core puzzle trait and part selection

use crate::error::SolveError;
use crate::format::InputFormat;
use std::fmt::{self, Display};

/// Trait that every daily puzzle solution implements
///
/// A puzzle describes how its input file is processed through an
/// [`InputFormat`], and provides one solver function per part. Each solver
/// receives its own copy of the processed input, so it is free to consume or
/// mutate it.
///
/// # Example
///
/// ```
/// use aoc_harness::{InputFormat, ItemFormat, Puzzle, SolveError};
/// use std::fmt::Display;
///
/// struct Depths;
///
/// impl Puzzle for Depths {
///     type Input = Vec<u32>;
///
///     fn input_format() -> InputFormat<Self::Input> {
///         ItemFormat::lines().parse_items::<u32>().into_input()
///     }
///
///     fn part1(input: Self::Input) -> Result<impl Display, SolveError> {
///         Ok(input.windows(2).filter(|w| w[1] > w[0]).count())
///     }
///
///     fn part2(mut input: Self::Input) -> Result<impl Display, SolveError> {
///         input.sort_unstable();
///         input.last().copied().ok_or(SolveError::NoAnswer("empty input".into()))
///     }
/// }
///
/// let input = Depths::input_format().parse("1\n3\n2\n").unwrap();
/// assert_eq!(Depths::part1(input.clone()).unwrap().to_string(), "1");
/// assert_eq!(Depths::part2(input).unwrap().to_string(), "3");
/// ```
pub trait Puzzle {
    /// The processed input handed to each part
    type Input: Clone + 'static;

    /// How the raw input file becomes [`Puzzle::Input`]
    fn input_format() -> InputFormat<Self::Input>;

    /// Solve part 1
    fn part1(input: Self::Input) -> Result<impl Display, SolveError>;

    /// Solve part 2
    fn part2(input: Self::Input) -> Result<impl Display, SolveError>;
}

/// One of the two sub-problems of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Which parts to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PartSelection {
    Part1,
    Part2,
    #[default]
    Both,
}

impl PartSelection {
    /// Resolve the `--part1` / `--part2` flags; neither or both means both
    pub fn from_flags(part1: bool, part2: bool) -> Self {
        match (part1, part2) {
            (true, false) => PartSelection::Part1,
            (false, true) => PartSelection::Part2,
            _ => PartSelection::Both,
        }
    }

    /// Selected parts in the order they are solved
    pub fn parts(self) -> &'static [Part] {
        match self {
            PartSelection::Part1 => &[Part::One],
            PartSelection::Part2 => &[Part::Two],
            PartSelection::Both => &[Part::One, Part::Two],
        }
    }
}
