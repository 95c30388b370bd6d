//! Calendar day numbers

use crate::error::DayError;
use std::fmt;
use std::str::FromStr;

/// Number of days in the calendar
pub const DAYS: u8 = 25;

/// A validated calendar day, 1 through 25
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    /// First day of the calendar
    pub const FIRST: Day = Day(1);
    /// Last day of the calendar
    pub const LAST: Day = Day(DAYS);

    /// Create a day, returning `None` outside 1-25
    pub const fn new(day: u8) -> Option<Day> {
        if day >= 1 && day <= DAYS {
            Some(Day(day))
        } else {
            None
        }
    }

    /// The day number
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot used by flat per-day storage
    pub(crate) fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Directory name holding the day's input files, e.g. `day05`
    pub fn dir_name(self) -> String {
        format!("day{:02}", self.0)
    }

    /// Every day of the calendar in ascending order
    pub fn all() -> impl Iterator<Item = Day> {
        (1..=DAYS).map(Day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Day {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| DayError::NotANumber(s.to_string()))?;
        u8::try_from(n)
            .ok()
            .and_then(Day::new)
            .ok_or(DayError::OutOfRange(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_days() {
        assert_eq!("1".parse::<Day>(), Ok(Day::FIRST));
        assert_eq!("25".parse::<Day>(), Ok(Day::LAST));
        assert_eq!(" 7 ".parse::<Day>().map(Day::get), Ok(7));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!("0".parse::<Day>(), Err(DayError::OutOfRange(0)));
        assert_eq!("26".parse::<Day>(), Err(DayError::OutOfRange(26)));
        assert_eq!("-3".parse::<Day>(), Err(DayError::OutOfRange(-3)));
        assert_eq!("300".parse::<Day>(), Err(DayError::OutOfRange(300)));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert!(matches!("five".parse::<Day>(), Err(DayError::NotANumber(_))));
        assert!(matches!("1.5".parse::<Day>(), Err(DayError::NotANumber(_))));
        assert!(matches!("".parse::<Day>(), Err(DayError::NotANumber(_))));
    }

    #[test]
    fn test_all_days_ascending() {
        let days: Vec<u8> = Day::all().map(Day::get).collect();
        assert_eq!(days, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_dir_name_is_zero_padded() {
        assert_eq!(Day::new(5).map(Day::dir_name).as_deref(), Some("day05"));
        assert_eq!(Day::LAST.dir_name(), "day25");
    }
}
