//! Error types for frame conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from sexagesimal parsing or refraction.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FrameError {
    /// A compact sexagesimal field could not be parsed.
    MalformedSexagesimal { input: String, reason: &'static str },
    /// Refraction requested for an altitude outside [0°, 90°].
    RefractionDomain { altitude_deg: f64 },
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedSexagesimal { input, reason } => {
                write!(f, "malformed sexagesimal '{input}': {reason}")
            }
            Self::RefractionDomain { altitude_deg } => {
                write!(f, "refraction undefined at altitude {altitude_deg}°")
            }
        }
    }
}

impl Error for FrameError {}
