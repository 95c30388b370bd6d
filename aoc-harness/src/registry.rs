//! Puzzle registry mapping calendar days to solutions

use crate::day::{DAYS, Day};
use crate::error::{RegistrationError, ResolveError};
use crate::instance::DynPuzzle;

/// Plugin information for automatic puzzle registration
///
/// Submitted by `#[derive(AutoRegisterPuzzle)]`, or by hand:
///
/// ```no_run
/// use aoc_harness::{InputFormat, Puzzle, PuzzlePlugin, SolveError};
/// use std::fmt::Display;
///
/// struct Day7;
///
/// impl Puzzle for Day7 {
///     type Input = String;
///
///     fn input_format() -> InputFormat<Self::Input> {
///         InputFormat::whole()
///     }
///
///     fn part1(input: String) -> Result<impl Display, SolveError> {
///         Ok(input.len())
///     }
///
///     fn part2(input: String) -> Result<impl Display, SolveError> {
///         Ok(input.lines().count())
///     }
/// }
///
/// aoc_harness::inventory::submit! {
///     PuzzlePlugin {
///         day: 7,
///         puzzle: &Day7,
///     }
/// }
/// ```
pub struct PuzzlePlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The puzzle (type-erased)
    pub puzzle: &'static dyn DynPuzzle,
}

inventory::collect!(PuzzlePlugin);

/// Builder for constructing a [`PuzzleRegistry`]
///
/// Registration fails on duplicate days and on days outside 1-25.
///
/// ```no_run
/// # use aoc_harness::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<&'static dyn DynPuzzle>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with one slot per day
    pub fn new() -> Self {
        Self {
            entries: vec![None; DAYS as usize],
        }
    }

    /// Register a puzzle for a specific day
    pub fn register(
        mut self,
        day: u8,
        puzzle: &'static dyn DynPuzzle,
    ) -> Result<Self, RegistrationError> {
        let day = Day::new(day).ok_or(RegistrationError::InvalidDay {
            day,
            name: puzzle.name(),
        })?;
        let slot = &mut self.entries[day.index()];

        if let Some(existing) = slot {
            return Err(RegistrationError::DuplicatePuzzle {
                day,
                existing: existing.name(),
                name: puzzle.name(),
            });
        }

        *slot = Some(puzzle);
        tracing::trace!(day = day.get(), puzzle = puzzle.name(), "registered");
        Ok(self)
    }

    /// Register all collected puzzle plugins
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register the collected plugins that match `filter`
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&PuzzlePlugin) -> bool,
    {
        for plugin in inventory::iter::<PuzzlePlugin>() {
            if filter(plugin) {
                self = self.register(plugin.day, plugin.puzzle)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> PuzzleRegistry {
        PuzzleRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable day → puzzle lookup
pub struct PuzzleRegistry {
    entries: Vec<Option<&'static dyn DynPuzzle>>,
}

impl PuzzleRegistry {
    /// Look up the puzzle registered for `day`
    pub fn get(&self, day: Day) -> Result<&'static dyn DynPuzzle, ResolveError> {
        self.entries
            .get(day.index())
            .copied()
            .flatten()
            .ok_or(ResolveError::NotFound(day))
    }

    /// Check whether a puzzle is registered for `day`
    pub fn contains(&self, day: Day) -> bool {
        self.get(day).is_ok()
    }

    /// Registered days in ascending order
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        Day::all().filter(|&day| self.contains(day))
    }

    /// Number of registered puzzles
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if no puzzle is registered
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}
