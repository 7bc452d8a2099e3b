//! A pointing target that follows sidereal time.
//!
//! Holds an object's equatorial position and the observer's latitude, and
//! keeps hour angle, altitude and azimuth current as local sidereal time
//! advances. Advancing by elapsed seconds avoids re-running the full
//! JD → GMST chain for every tracking tick.

use serde::{Deserialize, Serialize};

use crate::angle::normalize_360;
use crate::coords::{Equatorial, Horizontal};
use crate::horizontal::horizontal_from_equatorial;

/// Degrees of LST added per elapsed second of clock time on a tracking tick.
pub const LST_DEG_PER_SECOND: f64 = 0.004_236_11;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackedPosition {
    /// Target coordinates, RA in [0, 360).
    pub target: Equatorial,
    /// Observer latitude in degrees.
    pub latitude_deg: f64,
    /// Local sidereal time, degrees in [0, 360).
    pub lst_deg: f64,
    /// Hour angle, degrees in [0, 360).
    pub ha_deg: f64,
    /// Current altitude/azimuth.
    pub horizontal: Horizontal,
}

impl TrackedPosition {
    pub fn new(target: Equatorial, latitude_deg: f64, lst_deg: f64) -> Self {
        let mut pos = Self {
            target: Equatorial::new(target.ra_deg, target.dec_deg),
            latitude_deg,
            lst_deg: 0.0,
            ha_deg: 0.0,
            horizontal: Horizontal::new(0.0, 0.0),
        };
        pos.update_lst(lst_deg);
        pos
    }

    /// Position `offset_seconds` of clock time away from `lst_deg`.
    pub fn with_offset(
        target: Equatorial,
        offset_seconds: f64,
        latitude_deg: f64,
        lst_deg: f64,
    ) -> Self {
        Self::new(
            target,
            latitude_deg,
            lst_deg + offset_seconds * LST_DEG_PER_SECOND,
        )
    }

    /// Move forward (or back, if negative) by `seconds` of clock time.
    pub fn advance(&mut self, seconds: f64) {
        self.update_lst(self.lst_deg + seconds * LST_DEG_PER_SECOND);
    }

    /// Replace the local sidereal time and recompute alt/az.
    pub fn update_lst(&mut self, lst_deg: f64) {
        self.lst_deg = normalize_360(lst_deg);
        self.ha_deg = normalize_360(self.lst_deg - self.target.ra_deg);
        self.horizontal =
            horizontal_from_equatorial(self.ha_deg, self.target.dec_deg, self.latitude_deg);
    }

    pub fn is_above_horizon(&self) -> bool {
        self.horizontal.alt_deg > 0.0
    }
}
