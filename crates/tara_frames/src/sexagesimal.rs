//! Sexagesimal (base-60) angle and time values.
//!
//! A [`Sexagesimal`] is a sign plus whole units, minutes and seconds. The
//! unit is whatever the caller means by it: hours for right ascension,
//! degrees for declination, altitude and azimuth. The sign applies to every
//! component, so `-00° 30′` is representable and round-trips.
//!
//! Catalog records store coordinates in compact form: `HHMMSS.ss` for right
//! ascension and `±DDMMSS` for declination.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::FrameError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sexagesimal {
    /// True if the whole value is negative.
    pub negative: bool,
    /// Whole hours or degrees.
    pub whole: u32,
    /// Minutes (0..59).
    pub minutes: u32,
    /// Seconds (0.0..60.0), may include a fractional part.
    pub seconds: f64,
}

impl Sexagesimal {
    pub fn new(negative: bool, whole: u32, minutes: u32, seconds: f64) -> Self {
        Self {
            negative,
            whole,
            minutes,
            seconds,
        }
    }

    /// Split a decimal value into sign, whole units, minutes and seconds.
    ///
    /// Truncates toward zero at each step; the remainder lands in `seconds`.
    pub fn from_decimal(value: f64) -> Self {
        let negative = value < 0.0;
        let abs = value.abs();
        let mut whole = abs.trunc();
        let rem = (abs - whole) * 60.0;
        let mut minutes = rem.trunc();
        let seconds = (rem - minutes) * 60.0;
        if minutes >= 60.0 {
            minutes -= 60.0;
            whole += 1.0;
        }
        Self {
            negative,
            whole: whole as u32,
            minutes: minutes as u32,
            seconds,
        }
    }

    /// Signed decimal value: `±(whole + minutes/60 + seconds/3600)`.
    pub fn to_decimal(&self) -> f64 {
        let magnitude = self.whole as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative { -magnitude } else { magnitude }
    }

    /// Parse a compact right ascension `HHMMSS.ss` into hours.
    pub fn parse_compact_hms(s: &str) -> Result<Self, FrameError> {
        let s = s.trim();
        let digits = compact_body(s, 5)?;
        let hours = parse_u32(s, &digits[0..2])?;
        let minutes = parse_u32(s, &digits[2..4])?;
        let seconds = parse_seconds(s, &digits[4..])?;
        if hours >= 24 {
            return Err(malformed(s, "hours must be below 24"));
        }
        check_minutes_seconds(s, minutes, seconds)?;
        Ok(Self::new(false, hours, minutes, seconds))
    }

    /// Parse a compact declination `±DDMMSS` into degrees.
    ///
    /// The sign is optional; a missing sign means north.
    pub fn parse_compact_dms(s: &str) -> Result<Self, FrameError> {
        let s = s.trim();
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let digits = compact_body(body, 5)?;
        let degrees = parse_u32(s, &digits[0..2])?;
        let minutes = parse_u32(s, &digits[2..4])?;
        let seconds = parse_seconds(s, &digits[4..])?;
        check_minutes_seconds(s, minutes, seconds)?;
        let parsed = Self::new(negative, degrees, minutes, seconds);
        if parsed.to_decimal().abs() > 90.0 {
            return Err(malformed(s, "declination beyond ±90°"));
        }
        Ok(parsed)
    }

    /// Round seconds to `decimals` places, carrying a full 60 into minutes
    /// and whole units.
    ///
    /// A value that rounds to zero loses its sign.
    pub fn rounded(&self, decimals: i32) -> Self {
        let scale = 10f64.powi(decimals);
        let mut seconds = (self.seconds * scale).round() / scale;
        let mut minutes = self.minutes;
        let mut whole = self.whole;
        if seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            whole += 1;
        }
        let zero = whole == 0 && minutes == 0 && seconds == 0.0;
        Self {
            negative: self.negative && !zero,
            whole,
            minutes,
            seconds,
        }
    }

    /// Format as hours: `12h 26m 35.90s`.
    pub fn format_hms(&self) -> String {
        let r = self.rounded(DISPLAY_DECIMALS);
        format!(
            "{}{}h {:02}m {:05.2}s",
            if r.negative { "-" } else { "" },
            r.whole,
            r.minutes,
            r.seconds
        )
    }
}

/// Seconds precision of the text forms.
const DISPLAY_DECIMALS: i32 = 2;

/// Degrees form: `-63° 05′ 56.00″`.
impl Display for Sexagesimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let r = self.rounded(DISPLAY_DECIMALS);
        write!(
            f,
            "{}{}° {:02}′ {:05.2}″",
            if r.negative { "-" } else { "" },
            r.whole,
            r.minutes,
            r.seconds
        )
    }
}

fn malformed(input: &str, reason: &'static str) -> FrameError {
    FrameError::MalformedSexagesimal {
        input: input.to_string(),
        reason,
    }
}

/// Validate that a compact body is ASCII and long enough to slice.
fn compact_body(body: &str, min_len: usize) -> Result<&str, FrameError> {
    if !body.is_ascii() {
        return Err(malformed(body, "non-ASCII characters"));
    }
    if body.len() < min_len {
        return Err(malformed(body, "too short"));
    }
    Ok(body)
}

fn parse_u32(input: &str, field: &str) -> Result<u32, FrameError> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(input, "expected digits"));
    }
    field
        .parse::<u32>()
        .map_err(|_| malformed(input, "expected digits"))
}

fn parse_seconds(input: &str, field: &str) -> Result<f64, FrameError> {
    if field.starts_with(['+', '-']) {
        return Err(malformed(input, "signed seconds field"));
    }
    let seconds = field
        .parse::<f64>()
        .map_err(|_| malformed(input, "unparsable seconds"))?;
    if !seconds.is_finite() {
        return Err(malformed(input, "unparsable seconds"));
    }
    Ok(seconds)
}

fn check_minutes_seconds(input: &str, minutes: u32, seconds: f64) -> Result<(), FrameError> {
    if minutes >= 60 {
        return Err(malformed(input, "minutes must be below 60"));
    }
    if !(0.0..60.0).contains(&seconds) {
        return Err(malformed(input, "seconds must be below 60"));
    }
    Ok(())
}
