//! Error types for the harness library

use crate::day::Day;
use crate::puzzle::Part;
use std::convert::Infallible;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for turning raw input text into a puzzle input value
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// A single delimited item failed its item hook (1-based index)
    #[error("Item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: Box<ParseError>,
    },
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

impl ParseError {
    pub(crate) fn at_item(self, index: usize) -> Self {
        ParseError::Item {
            index,
            source: Box::new(self),
        }
    }
}

impl From<ParseIntError> for ParseError {
    fn from(e: ParseIntError) -> Self {
        ParseError::InvalidFormat(e.to_string())
    }
}

impl From<ParseFloatError> for ParseError {
    fn from(e: ParseFloatError) -> Self {
        ParseError::InvalidFormat(e.to_string())
    }
}

impl From<Infallible> for ParseError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part has not been written yet
    #[error("Part {0} is not implemented")]
    PartNotImplemented(Part),
    /// The input does not admit an answer
    #[error("No answer: {0}")]
    NoAnswer(String),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for loading a puzzle input file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file does not exist
    #[error("No input data file found (looked in {}).", .0.display())]
    NotFound(PathBuf),
    /// Any other I/O failure while reading the input file
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file was read but its contents could not be processed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LoadError {
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound(path)
        } else {
            LoadError::Io { path, source }
        }
    }
}

/// Error type for a single puzzle run (load, then solve each part)
#[derive(Debug, Error)]
pub enum RunError {
    /// Loading the input failed
    #[error(transparent)]
    Load(#[from] LoadError),
    /// A part's solver returned an error
    #[error("Part {part} failed: {source}")]
    Solve {
        part: Part,
        #[source]
        source: SolveError,
    },
    /// Writing progress to the console failed
    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

impl RunError {
    /// Path of the missing input file, if that is why the run was aborted
    pub fn missing_input(&self) -> Option<&std::path::Path> {
        match self {
            RunError::Load(LoadError::NotFound(path)) => Some(path),
            _ => None,
        }
    }
}

/// Error type for looking up a day in the registry
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// No solution registered for the given day
    #[error("No solution registered for day {0}")]
    NotFound(Day),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Day number outside 1-25
    #[error("Cannot register {name} for day {day}: days run from 1 to 25")]
    InvalidDay { day: u8, name: &'static str },
    /// Attempted to register two solutions for the same day
    #[error("Duplicate registration for day {day}: {existing} and {name}")]
    DuplicatePuzzle {
        day: Day,
        existing: &'static str,
        name: &'static str,
    },
}

/// Error type for parsing a day argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DayError {
    /// The value is not an integer
    #[error("{0:?} is not a day number")]
    NotANumber(String),
    /// The value is an integer outside 1-25
    #[error("day {0} is outside 1-25")]
    OutOfRange(i64),
}
