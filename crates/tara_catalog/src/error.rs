//! Error types for catalog selection and observation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use tara_frames::FrameError;
use tara_time::TimeError;

/// Errors from catalog conversion, object selection or the observation
/// pipeline. All are fatal to the computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CatalogError {
    /// A catalog record has an unparsable coordinate field.
    MalformedCatalogEntry { name: String, source: FrameError },
    /// The scan reached its limit without any object clearing the altitude
    /// threshold.
    NoVisibleObject { scanned: usize, min_altitude_deg: f64 },
    /// Error from a frame conversion (e.g. refraction domain).
    Frame(FrameError),
    /// Error from time parsing.
    Time(TimeError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedCatalogEntry { name, source } => {
                write!(f, "malformed catalog entry '{name}': {source}")
            }
            Self::NoVisibleObject {
                scanned,
                min_altitude_deg,
            } => write!(
                f,
                "no visible object: scanned {scanned} entries, none reached {min_altitude_deg}°"
            ),
            Self::Frame(e) => write!(f, "frame error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedCatalogEntry { source, .. } => Some(source),
            Self::Frame(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::NoVisibleObject { .. } => None,
        }
    }
}

impl From<FrameError> for CatalogError {
    fn from(e: FrameError) -> Self {
        Self::Frame(e)
    }
}

impl From<TimeError> for CatalogError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
