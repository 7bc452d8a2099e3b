//! Pipe-delimited snapshot of a computed time state.
//!
//! Format: `Y|M|D|h|m|s|LST|diff|JD|T`, with the Meeus-adjusted year and
//! month. Restoring a snapshot skips the JD/GMST chain entirely, which lets
//! a controller hand its time state to another process and keep pointing
//! from the same sidereal reference.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::civil::CivilInstant;
use crate::error::TimeError;
use crate::sidereal::{SiderealTime, clock_angle_deg};

const FIELD_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealSnapshot {
    /// Meeus-adjusted year.
    pub year: i32,
    /// Meeus-adjusted month.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    pub lst_deg: f64,
    pub clock_offset_deg: f64,
    pub jd: f64,
    pub centuries: f64,
}

impl SiderealSnapshot {
    /// Capture an instant and the sidereal quantities derived from it.
    pub fn capture(instant: &CivilInstant, time: &SiderealTime) -> Self {
        Self {
            year: time.year,
            month: time.month,
            day: instant.day,
            hour: instant.hour,
            minute: instant.minute,
            second: instant.second,
            lst_deg: time.lst_deg,
            clock_offset_deg: time.clock_offset_deg,
            jd: time.jd,
            centuries: time.centuries,
        }
    }

    /// Rebuild the sidereal state.
    ///
    /// GMST is not stored; it is recovered as clock angle minus `diff`.
    pub fn sidereal_time(&self) -> SiderealTime {
        let clock = clock_angle_deg(self.hour, self.minute, self.second);
        SiderealTime {
            year: self.year,
            month: self.month,
            jd: self.jd,
            centuries: self.centuries,
            gmst_deg: clock - self.clock_offset_deg,
            lst_deg: self.lst_deg,
            clock_offset_deg: self.clock_offset_deg,
        }
    }
}

impl Display for SiderealSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.lst_deg,
            self.clock_offset_deg,
            self.jd,
            self.centuries
        )
    }
}

fn field<T: FromStr>(parts: &[&str], idx: usize, name: &str) -> Result<T, TimeError>
where
    T::Err: Display,
{
    parts[idx]
        .trim()
        .parse::<T>()
        .map_err(|e| TimeError::SnapshotParse(format!("{name} '{}': {e}", parts[idx])))
}

impl FromStr for SiderealSnapshot {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('|').collect();
        if parts.len() != FIELD_COUNT {
            return Err(TimeError::SnapshotParse(format!(
                "expected {FIELD_COUNT} fields, got {}",
                parts.len()
            )));
        }
        Ok(Self {
            year: field(&parts, 0, "year")?,
            month: field(&parts, 1, "month")?,
            day: field(&parts, 2, "day")?,
            hour: field(&parts, 3, "hour")?,
            minute: field(&parts, 4, "minute")?,
            second: field(&parts, 5, "second")?,
            lst_deg: field(&parts, 6, "lst")?,
            clock_offset_deg: field(&parts, 7, "diff")?,
            jd: field(&parts, 8, "jd")?,
            centuries: field(&parts, 9, "T")?,
        })
    }
}
