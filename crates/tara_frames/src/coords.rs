//! Equatorial and horizontal coordinate pairs.

use serde::{Deserialize, Serialize};

use crate::angle::normalize_360;
use crate::sexagesimal::Sexagesimal;

/// Right ascension and declination, both in degrees.
///
/// RA and Dec are always corrected together; there is no setter for one
/// without the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    /// Right ascension in degrees, range [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
}

impl Equatorial {
    /// Build a coordinate, wrapping RA into [0, 360).
    pub fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            ra_deg: normalize_360(ra_deg),
            dec_deg,
        }
    }

    /// Right ascension as hours/minutes/seconds.
    pub fn ra_hms(&self) -> Sexagesimal {
        Sexagesimal::from_decimal(self.ra_deg / 15.0)
    }

    /// Declination as signed degrees/minutes/seconds.
    pub fn dec_dms(&self) -> Sexagesimal {
        Sexagesimal::from_decimal(self.dec_deg)
    }
}

/// Altitude above the horizon and azimuth from north through east, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    /// Altitude in degrees: 0 at the horizon, 90 at the zenith.
    pub alt_deg: f64,
    /// Azimuth in degrees, range [0, 360), north = 0, east = 90.
    pub az_deg: f64,
}

impl Horizontal {
    pub fn new(alt_deg: f64, az_deg: f64) -> Self {
        Self { alt_deg, az_deg }
    }
}
