//! Input formats: how raw input text becomes a puzzle input value
//!
//! An input format is a small immutable record: a [`Delimiter`], a
//! strip-whitespace flag, and two transform hooks. The item hook runs on
//! every delimited piece, the whole-value hook runs once on the collected
//! sequence (or on the raw text when nothing is split). Both hooks default
//! to the identity.
//!
//! ```
//! use aoc_harness::{InputFormat, ItemFormat, ParseError};
//!
//! // One integer per line, blank lines ignored
//! let numbers: InputFormat<Vec<i64>> = ItemFormat::lines().parse_items::<i64>().into_input();
//! assert_eq!(numbers.parse("1\n\n 2 \n3\n").unwrap(), vec![1, 2, 3]);
//!
//! // Comma separated, summed by the whole-value hook
//! let total = ItemFormat::split(",")
//!     .parse_items::<u32>()
//!     .map_input(|items| Ok::<_, ParseError>(items.iter().sum::<u32>()));
//! assert_eq!(total.parse("3,4,5\n").unwrap(), 12);
//!
//! // The whole file as one string
//! assert_eq!(InputFormat::whole().parse("  abc \n").unwrap(), "abc");
//! ```

use crate::error::{LoadError, ParseError};
use chrono::{DateTime, TimeDelta, Utc};
use std::any::type_name;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// How raw input text is divided into items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// One item per line; blank lines are skipped
    Newline,
    /// Items separated by a non-empty, non-newline string
    Separator(&'static str),
    /// No splitting; the whole file is a single value
    Whole,
}

impl Delimiter {
    /// Unit used when reporting the size of loaded input
    pub fn unit(self) -> &'static str {
        match self {
            Delimiter::Newline => "lines",
            Delimiter::Separator(_) => "items",
            Delimiter::Whole => "bytes",
        }
    }
}

/// The delimiters that divide input into items
#[derive(Debug, Clone, Copy)]
enum Split {
    Lines,
    On(&'static str),
}

impl From<Split> for Delimiter {
    fn from(split: Split) -> Self {
        match split {
            Split::Lines => Delimiter::Newline,
            Split::On(separator) => Delimiter::Separator(separator),
        }
    }
}

type ItemHook<I> = Box<dyn Fn(String) -> Result<I, ParseError> + Send + Sync>;
type Pipeline<T> = Box<dyn Fn(&str, bool) -> Result<Parsed<T>, ParseError> + Send + Sync>;

/// A value produced by a pipeline, with its size in [`Delimiter::unit`]s
struct Parsed<T> {
    value: T,
    size: usize,
}

fn strip(text: &str, strip_whitespace: bool) -> &str {
    if strip_whitespace { text.trim() } else { text }
}

/// A delimited input format whose items have not yet been collected
///
/// Created with [`ItemFormat::lines`] or [`ItemFormat::split`], refined with
/// [`map_items`](ItemFormat::map_items), and finished with
/// [`map_input`](ItemFormat::map_input) or [`into_input`](ItemFormat::into_input).
pub struct ItemFormat<I> {
    split: Split,
    strip_whitespace: bool,
    item: ItemHook<I>,
}

impl ItemFormat<String> {
    /// One item per line
    pub fn lines() -> Self {
        Self {
            split: Split::Lines,
            strip_whitespace: true,
            item: Box::new(Ok::<String, ParseError>),
        }
    }

    /// Items separated by `separator`
    ///
    /// A separator of `"\n"` is the same as [`ItemFormat::lines`].
    ///
    /// # Panics
    ///
    /// Panics if `separator` is empty.
    pub fn split(separator: &'static str) -> Self {
        assert!(!separator.is_empty(), "input separator must not be empty");
        if separator == "\n" {
            return Self::lines();
        }
        Self {
            split: Split::On(separator),
            strip_whitespace: true,
            item: Box::new(Ok::<String, ParseError>),
        }
    }
}

impl<I: 'static> ItemFormat<I> {
    /// Whether to strip leading/trailing whitespace from the input and each item
    pub fn strip_whitespace(mut self, strip_whitespace: bool) -> Self {
        self.strip_whitespace = strip_whitespace;
        self
    }

    /// Add a per-item transform, applied after any previous item hooks
    pub fn map_items<J, E, F>(self, f: F) -> ItemFormat<J>
    where
        J: 'static,
        E: Into<ParseError> + 'static,
        F: Fn(I) -> Result<J, E> + Send + Sync + 'static,
    {
        let item = self.item;
        ItemFormat {
            split: self.split,
            strip_whitespace: self.strip_whitespace,
            item: Box::new(move |raw| {
                item(raw).and_then(|i| f(i).map_err(Into::<ParseError>::into))
            }),
        }
    }

    /// Collect the items and hand the sequence to a whole-value hook
    pub fn map_input<T, E, F>(self, f: F) -> InputFormat<T>
    where
        T: 'static,
        E: Into<ParseError> + 'static,
        F: Fn(Vec<I>) -> Result<T, E> + Send + Sync + 'static,
    {
        let split = self.split;
        let item = self.item;
        InputFormat {
            delimiter: split.into(),
            strip_whitespace: self.strip_whitespace,
            pipeline: Box::new(move |text: &str, strip_whitespace: bool| {
                let items = split_items(text, split, strip_whitespace, &item)?;
                let size = items.len();
                let value = f(items).map_err(Into::<ParseError>::into)?;
                Ok(Parsed { value, size })
            }),
        }
    }

    /// Collect the items into a `Vec` without a whole-value hook
    pub fn into_input(self) -> InputFormat<Vec<I>> {
        self.map_input(Ok::<_, ParseError>)
    }
}

impl ItemFormat<String> {
    /// Parse every item with [`FromStr`](std::str::FromStr)
    pub fn parse_items<J>(self) -> ItemFormat<J>
    where
        J: std::str::FromStr + 'static,
        J::Err: fmt::Display,
    {
        self.map_items(|item: String| {
            item.parse::<J>()
                .map_err(|e| ParseError::InvalidFormat(format!("{item:?}: {e}")))
        })
    }
}

impl<I: 'static> From<ItemFormat<I>> for InputFormat<Vec<I>> {
    fn from(format: ItemFormat<I>) -> Self {
        format.into_input()
    }
}

fn split_items<I>(
    text: &str,
    split: Split,
    strip_whitespace: bool,
    item: &ItemHook<I>,
) -> Result<Vec<I>, ParseError> {
    let pieces: Vec<&str> = match split {
        Split::Lines => text
            .lines()
            .map(|line| strip(line, strip_whitespace))
            .filter(|line| !line.is_empty())
            .collect(),
        Split::On(separator) => strip(text, strip_whitespace)
            .split(separator)
            .map(|piece| strip(piece, strip_whitespace))
            .collect(),
    };

    pieces
        .into_iter()
        .enumerate()
        .map(|(i, piece)| item(piece.to_owned()).map_err(|e| e.at_item(i + 1)))
        .collect()
}

/// A complete input format producing a `T`
pub struct InputFormat<T> {
    delimiter: Delimiter,
    strip_whitespace: bool,
    pipeline: Pipeline<T>,
}

impl InputFormat<String> {
    /// The whole file as a single string
    pub fn whole() -> Self {
        Self {
            delimiter: Delimiter::Whole,
            strip_whitespace: true,
            pipeline: Box::new(|text: &str, strip_whitespace: bool| {
                let value = strip(text, strip_whitespace).to_owned();
                Ok(Parsed {
                    size: value.len(),
                    value,
                })
            }),
        }
    }
}

impl<T: 'static> InputFormat<T> {
    /// The configured delimiter
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Whether leading/trailing whitespace is stripped
    pub fn strips_whitespace(&self) -> bool {
        self.strip_whitespace
    }

    /// Whether to strip leading/trailing whitespace from the input and each item
    pub fn strip_whitespace(mut self, strip_whitespace: bool) -> Self {
        self.strip_whitespace = strip_whitespace;
        self
    }

    /// Add a whole-value transform, applied after any previous hooks
    pub fn map_input<U, E, F>(self, f: F) -> InputFormat<U>
    where
        U: 'static,
        E: Into<ParseError> + 'static,
        F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
    {
        let pipeline = self.pipeline;
        InputFormat {
            delimiter: self.delimiter,
            strip_whitespace: self.strip_whitespace,
            pipeline: Box::new(move |text: &str, strip_whitespace: bool| {
                let Parsed { value, size } = pipeline(text, strip_whitespace)?;
                let value = f(value).map_err(Into::<ParseError>::into)?;
                Ok(Parsed { value, size })
            }),
        }
    }

    /// Process input text that is already in memory
    pub fn parse(&self, text: &str) -> Result<T, ParseError> {
        (self.pipeline)(text, self.strip_whitespace).map(|parsed| parsed.value)
    }

    /// Read and process an input file
    ///
    /// A missing file is reported as [`LoadError::NotFound`], separately from
    /// other I/O failures.
    pub fn load(&self, path: &Path) -> Result<Loaded<T>, LoadError> {
        let load_start = Utc::now();
        let text =
            fs::read_to_string(path).map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;
        let Parsed { value, size } = (self.pipeline)(&text, self.strip_whitespace)?;
        let load_end = Utc::now();

        let stats = LoadStats {
            path: path.to_path_buf(),
            size,
            unit: self.delimiter.unit(),
            type_name: type_name::<T>(),
            load_start,
            load_end,
        };
        tracing::debug!(
            path = %stats.path.display(),
            size,
            unit = stats.unit,
            elapsed_us = stats.duration().num_microseconds(),
            "loaded input"
        );
        Ok(Loaded { value, stats })
    }
}

impl<T> fmt::Debug for InputFormat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputFormat")
            .field("delimiter", &self.delimiter)
            .field("strip_whitespace", &self.strip_whitespace)
            .field("output", &type_name::<T>())
            .finish_non_exhaustive()
    }
}

/// A loaded input value together with load statistics
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub value: T,
    pub stats: LoadStats,
}

/// What was loaded and how long it took
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// File the input was read from
    pub path: PathBuf,
    /// Number of lines/items, or bytes for whole-file input
    pub size: usize,
    /// `lines`, `items` or `bytes`
    pub unit: &'static str,
    /// Rust type the input was processed into
    pub type_name: &'static str,
    pub load_start: DateTime<Utc>,
    pub load_end: DateTime<Utc>,
}

impl LoadStats {
    pub fn duration(&self) -> TimeDelta {
        self.load_end - self.load_start
    }
}
