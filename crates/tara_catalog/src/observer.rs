//! Observer site and per-run context.

use serde::{Deserialize, Serialize};
use tara_time::{CivilInstant, SiderealTime};

/// Latitude of the default site (Siding Spring), degrees.
pub const DEFAULT_LATITUDE_DEG: f64 = -31.08;
/// East longitude of the default site, degrees.
pub const DEFAULT_LONGITUDE_DEG: f64 = 150.944_799;

/// Geographic position of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl Observer {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG)
    }
}

/// The observer and the sidereal state for one run.
///
/// Computed once and passed by reference to every component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunContext {
    pub observer: Observer,
    pub time: SiderealTime,
}

impl RunContext {
    /// Compute the sidereal state for `instant` at the observer's longitude.
    pub fn new(observer: Observer, instant: &CivilInstant) -> Self {
        Self {
            observer,
            time: SiderealTime::compute(instant, observer.longitude_deg),
        }
    }

    /// Use an already computed (e.g. restored) sidereal state.
    pub fn from_sidereal(observer: Observer, time: SiderealTime) -> Self {
        Self { observer, time }
    }

    pub fn lst_deg(&self) -> f64 {
        self.time.lst_deg
    }

    pub fn latitude_deg(&self) -> f64 {
        self.observer.latitude_deg
    }

    /// Year that catalog coordinates are precessed to.
    pub fn precession_year(&self) -> f64 {
        self.time.precession_year()
    }
}
