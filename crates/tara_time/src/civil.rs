//! Civil UTC calendar instant.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{julian_date, meeus_adjust};

/// A civil UTC date and clock time, month numbered 1–12 (not adjusted).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CivilInstant {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Year and month after the Meeus January/February shift.
    pub fn adjusted_year_month(&self) -> (i32, u32) {
        meeus_adjust(self.year, self.month)
    }

    /// Julian Date of this instant (adjustment applied internally).
    pub fn julian_date(&self) -> f64 {
        let (year, month) = self.adjusted_year_month();
        julian_date(year, month, self.day, self.hour, self.minute, self.second)
    }

    fn validate(self) -> Result<Self, TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidInstant(format!(
                "month {} out of range 1-12",
                self.month
            )));
        }
        let last = days_in_month(self.year, self.month);
        if !(1..=last).contains(&self.day) {
            return Err(TimeError::InvalidInstant(format!(
                "day {} out of range 1-{last} for {:04}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 || self.minute > 59 {
            return Err(TimeError::InvalidInstant(format!(
                "clock {:02}:{:02} out of range",
                self.hour, self.minute
            )));
        }
        if !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::InvalidInstant(format!(
                "second {} out of range",
                self.second
            )));
        }
        Ok(self)
    }

    /// Parse the compact 14-digit form `YYYYMMDDhhmmss`.
    fn parse_compact(s: &str) -> Result<Self, TimeError> {
        let field = |range: std::ops::Range<usize>| -> Result<u32, TimeError> {
            s[range]
                .parse::<u32>()
                .map_err(|e| TimeError::InvalidInstant(format!("{s}: {e}")))
        };
        let year = s[0..4]
            .parse::<i32>()
            .map_err(|e| TimeError::InvalidInstant(format!("{s}: {e}")))?;
        Ok(Self::new(
            year,
            field(4..6)?,
            field(6..8)?,
            field(8..10)?,
            field(10..12)?,
            field(12..14)? as f64,
        ))
    }

    /// Parse `YYYY-MM-DDThh:mm:ss` with an optional trailing `Z`.
    fn parse_iso(s: &str) -> Result<Self, TimeError> {
        let s = s.trim_end_matches('Z');
        let Some((date, time)) = s.split_once('T') else {
            return Err(TimeError::InvalidInstant(format!(
                "expected YYYY-MM-DDThh:mm:ssZ, got {s}"
            )));
        };
        let date_parts: Vec<&str> = date.split('-').collect();
        let time_parts: Vec<&str> = time.split(':').collect();
        if date_parts.len() != 3 || time_parts.len() != 3 {
            return Err(TimeError::InvalidInstant(format!(
                "invalid date/time format: {s}"
            )));
        }
        let bad = |e: &dyn std::fmt::Display| TimeError::InvalidInstant(format!("{s}: {e}"));
        let year: i32 = date_parts[0].parse().map_err(|e| bad(&e))?;
        let month: u32 = date_parts[1].parse().map_err(|e| bad(&e))?;
        let day: u32 = date_parts[2].parse().map_err(|e| bad(&e))?;
        let hour: u32 = time_parts[0].parse().map_err(|e| bad(&e))?;
        let minute: u32 = time_parts[1].parse().map_err(|e| bad(&e))?;
        let second: f64 = time_parts[2].parse().map_err(|e| bad(&e))?;
        Ok(Self::new(year, month, day, hour, minute, second))
    }
}

impl FromStr for CivilInstant {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DDThh:mm:ss[Z]` or compact `YYYYMMDDhhmmss`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = if s.len() == 14 && s.bytes().all(|b| b.is_ascii_digit()) {
            Self::parse_compact(s)?
        } else {
            Self::parse_iso(s)?
        };
        parsed.validate()
    }
}

impl std::fmt::Display for CivilInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

/// Gregorian leap year.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of a civil month, 1-based.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}
