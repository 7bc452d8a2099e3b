//! Rise and set times for a fixed catalog object.
//!
//! Semi-diurnal arc `H₀ = acos(−tan φ·tan δ)`; the object sets at `α + H₀`
//! and rises at `α − H₀`, both then shifted by the run's clock offset and a
//! fixed local-time constant.
//!
//! The guard `δ > φ` and the +11° constant were calibrated for one southern
//! site. They are kept as-is; for other latitudes the true circumpolar test
//! is `|δ| > 90° − |φ|` and these results should be treated as unverified.

use serde::Serialize;
use tara_frames::{Equatorial, Sexagesimal, normalize_360};

/// Fixed local-time correction added to both events, degrees.
pub const LOCAL_TIME_OFFSET_DEG: f64 = 11.0;

/// Rise and set as sidereal angles, degrees (15° per hour).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiseSetTimes {
    pub rise_deg: f64,
    pub set_deg: f64,
}

impl RiseSetTimes {
    /// Rise time as hours/minutes/seconds, wrapped into one day.
    pub fn rise_hms(&self) -> Sexagesimal {
        to_clock(self.rise_deg)
    }

    /// Set time as hours/minutes/seconds, wrapped into one day.
    pub fn set_hms(&self) -> Sexagesimal {
        to_clock(self.set_deg)
    }
}

fn to_clock(deg: f64) -> Sexagesimal {
    Sexagesimal::from_decimal(normalize_360(deg) / 15.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiseSetResult {
    Times(RiseSetTimes),
    /// Neither rises nor sets.
    Never,
}

impl RiseSetResult {
    pub fn times(&self) -> Option<RiseSetTimes> {
        match self {
            Self::Times(t) => Some(*t),
            Self::Never => None,
        }
    }
}

/// Rise/set for an object at `position` (already precessed).
///
/// `clock_offset_deg` is the run's clock angle minus GMST. An arc-cosine
/// argument outside [−1, 1] inside the guarded branch also yields
/// [`RiseSetResult::Never`].
pub fn rise_set(position: Equatorial, latitude_deg: f64, clock_offset_deg: f64) -> RiseSetResult {
    if position.dec_deg <= latitude_deg {
        return RiseSetResult::Never;
    }

    let cos_h0 = -latitude_deg.to_radians().tan() * position.dec_deg.to_radians().tan();
    if !(-1.0..=1.0).contains(&cos_h0) {
        return RiseSetResult::Never;
    }

    let h0 = cos_h0.acos().to_degrees();
    let set = h0 + position.ra_deg;
    let rise = 2.0 * position.ra_deg - set;

    RiseSetResult::Times(RiseSetTimes {
        rise_deg: rise + clock_offset_deg + LOCAL_TIME_OFFSET_DEG,
        set_deg: set + clock_offset_deg + LOCAL_TIME_OFFSET_DEG,
    })
}
