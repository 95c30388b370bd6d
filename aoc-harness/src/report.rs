//! Console reporting of load and solve progress

use crate::format::LoadStats;
use crate::puzzle::Part;
use chrono::TimeDelta;
use std::io::{self, Write};

/// Banner printed around verbose runs and between days in batch mode
pub const SEPARATOR: &str = "==================================================";

/// Receives progress events from a puzzle run
///
/// The orchestrator calls these in order: `reading_input`, `input_loaded`,
/// then `solving` / `solved` for each selected part, then `finished`. A run
/// that fails stops emitting events at the point of failure.
pub trait Reporter {
    fn reading_input(&mut self, sample: bool) -> io::Result<()>;
    fn input_loaded(&mut self, stats: &LoadStats) -> io::Result<()>;
    fn solving(&mut self, part: Part) -> io::Result<()>;
    fn solved(&mut self, part: Part, answer: &str, elapsed: TimeDelta) -> io::Result<()>;
    fn finished(&mut self) -> io::Result<()>;
}

/// How much detail a run prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// One line per part
    Terse,
    /// Banners and explicit labels
    Verbose,
}

impl Verbosity {
    /// Create the matching reporter writing to `out`
    pub fn reporter<'a, W: Write + 'a>(self, out: W) -> Box<dyn Reporter + 'a> {
        match self {
            Verbosity::Terse => Box::new(Terse::new(out)),
            Verbosity::Verbose => Box::new(Verbose::new(out)),
        }
    }
}

fn write_load_line(out: &mut impl Write, stats: &LoadStats) -> io::Result<()> {
    writeln!(
        out,
        "Raw input: {} {} (processed into {}) [{}]",
        stats.size,
        stats.unit,
        stats.type_name,
        format_duration(stats.duration())
    )
}

/// `Part 1... 42 [12µs]`
pub struct Terse<W> {
    out: W,
}

impl<W: Write> Terse<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for Terse<W> {
    fn reading_input(&mut self, _sample: bool) -> io::Result<()> {
        Ok(())
    }

    fn input_loaded(&mut self, stats: &LoadStats) -> io::Result<()> {
        write_load_line(&mut self.out, stats)
    }

    fn solving(&mut self, part: Part) -> io::Result<()> {
        write!(self.out, "Part {part}... ")?;
        self.out.flush()
    }

    fn solved(&mut self, _part: Part, answer: &str, elapsed: TimeDelta) -> io::Result<()> {
        writeln!(self.out, "{answer} [{}]", format_duration(elapsed))
    }

    fn finished(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Banner-framed output with explicit "Solving" / "Solution" labels
pub struct Verbose<W> {
    out: W,
}

impl<W: Write> Verbose<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for Verbose<W> {
    fn reading_input(&mut self, sample: bool) -> io::Result<()> {
        let sample = if sample { "**SAMPLE** " } else { "" };
        writeln!(self.out, "{SEPARATOR}\n\nReading {sample}input...")
    }

    fn input_loaded(&mut self, stats: &LoadStats) -> io::Result<()> {
        write_load_line(&mut self.out, stats)
    }

    fn solving(&mut self, part: Part) -> io::Result<()> {
        writeln!(self.out, "\nSolving Part {part}...")?;
        self.out.flush()
    }

    fn solved(&mut self, _part: Part, answer: &str, elapsed: TimeDelta) -> io::Result<()> {
        writeln!(self.out, "Solution: {answer} [{}]", format_duration(elapsed))
    }

    fn finished(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{SEPARATOR}")?;
        self.out.flush()
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.3}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.6}s", micros as f64 / 1_000_000.0)
    }
}
