use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of periods in one timetable day, lunch included.
pub const PERIODS: usize = 13;

/// Period index reserved for lunch on every day.
pub const LUNCH_PERIOD: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `(day, period)` coordinate in the weekly grid.
///
/// Ordering is by day first, then period, which is the order cells are
/// scanned in when looking for clashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub day: Day,
    pub period: usize,
}

impl GridCell {
    pub fn new(day: Day, period: usize) -> Self {
        Self { day, period }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} period {}", self.day, self.period)
    }
}

/// Theory and lab slots follow different period timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    Theory,
    Lab,
}

impl SlotKind {
    /// Lab codes start with `L`, everything else is theory.
    pub fn of(code: &str) -> Self {
        if code.starts_with('L') {
            SlotKind::Lab
        } else {
            SlotKind::Theory
        }
    }
}

/// Half-open interval of minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: u16,
    pub end: u16,
}

impl TimeRange {
    pub const fn new(start_hour: u16, start_minute: u16, end_hour: u16, end_minute: u16) -> Self {
        Self {
            start: start_hour * 60 + start_minute,
            end: end_hour * 60 + end_minute,
        }
    }

    /// Two ranges overlap unless one ends at or before the other starts.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            self.end / 60,
            self.end % 60
        )
    }
}
