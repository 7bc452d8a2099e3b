//! Error types for time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil-time parsing or snapshot restoration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A civil date/time string could not be parsed.
    InvalidInstant(String),
    /// A sidereal snapshot string could not be parsed.
    SnapshotParse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInstant(msg) => write!(f, "invalid instant: {msg}"),
            Self::SnapshotParse(msg) => write!(f, "snapshot parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
