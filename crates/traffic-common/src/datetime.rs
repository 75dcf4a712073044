//! Weekday and time-of-day parsing for schedule columns.
//!
//! Traffic schedules carry a day name (`"Monday"`) in one column and a clock
//! time (`"05:00:00"`) in another. [`WeekTimestamp`] joins the two into a
//! point within a generic week.

use std::fmt;

use chrono::{NaiveTime, Timelike, Weekday};

/// Parse a weekday name such as `"Monday"` or `"mon"` (case-insensitive).
pub fn parse_weekday(value: &str) -> Option<Weekday> {
    value.trim().parse::<Weekday>().ok()
}

/// Parse a clock time in `HH:MM:SS` or `HH:MM` form.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
}

/// Whether a day falls on a weekday or the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    /// Saturday and Sunday are weekend days; everything else is a weekday.
    pub fn of(day: Weekday) -> Self {
        match day {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            _ => Self::Weekday,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::Weekend => "weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A day-of-week plus time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekTimestamp {
    pub weekday: Weekday,
    pub time: NaiveTime,
}

impl WeekTimestamp {
    /// Combine a day-name cell and a time cell.
    ///
    /// Returns `None` if either part is unparseable.
    pub fn parse(day: &str, time: &str) -> Option<Self> {
        Some(Self {
            weekday: parse_weekday(day)?,
            time: parse_time_of_day(time)?,
        })
    }

    /// Hour of day, `0..24`.
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn day_type(&self) -> DayType {
        DayType::of(self.weekday)
    }
}

impl fmt::Display for WeekTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weekday, self.time.format("%H:%M:%S"))
    }
}
