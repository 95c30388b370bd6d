//! Error types for the CLI

use aoc_harness::{DayError, RegistrationError, ResolveError, RunError};
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// The day argument is missing, not a number or outside 1-25
    #[error(
        "Invalid \"day\" argument. Either specify 1-25 to run that day's puzzle, \
         or use the --all flag to run all puzzles."
    )]
    InvalidDay {
        value: String,
        #[source]
        source: DayError,
    },

    /// Registration error
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// No solution for the requested day
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Loading or solving a puzzle failed
    #[error(transparent)]
    Run(#[from] RunError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Follow-up line printed after the error, if any
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::Resolve(ResolveError::NotFound(day)) => Some(format!(
                "Has a solution been written for the day {day} puzzle yet?"
            )),
            CliError::Registration(_) => Some("You should fix that.".to_string()),
            _ => None,
        }
    }
}
