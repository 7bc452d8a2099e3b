//! Greenwich Mean Sidereal Time and Local Sidereal Time, in degrees.
//!
//! GMST polynomial: Meeus, _Astronomical Algorithms_, eq. 12.4.
//!
//! LST is deliberately left un-normalized. Consumers subtract a right
//! ascension from it to form an hour angle; the trigonometry is insensitive
//! to a whole-turn offset but the rise/set arithmetic is not, so the raw sum
//! is kept.

use serde::{Deserialize, Serialize};

use crate::civil::CivilInstant;
use crate::julian::{J2000_JD, julian_centuries, julian_date};

/// Greenwich Mean Sidereal Time in degrees, in [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0) + 0.000387933·T² − T³/38710000
pub fn gmst_deg(t: f64, jd: f64) -> f64 {
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * (t * t)
        - (t * t * t) / 38_710_000.0;
    let wrapped = theta.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Local Sidereal Time: `GMST + longitude_east`, degrees, not normalized.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    gmst_deg + longitude_east_deg
}

/// UT clock reading expressed as an angle: 15° per hour.
pub fn clock_angle_deg(hour: u32, minute: u32, second: f64) -> f64 {
    hour as f64 * 15.0 + minute as f64 * 15.0 / 60.0 + second * 15.0 / 3600.0
}

/// Difference between the clock angle and the computed GMST, degrees.
///
/// Rise/set estimation adds this back as a timezone-style correction.
pub fn clock_offset_deg(hour: u32, minute: u32, second: f64, gmst_deg: f64) -> f64 {
    clock_angle_deg(hour, minute, second) - gmst_deg
}

/// Everything derived from one civil instant at one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiderealTime {
    /// Meeus-adjusted year (one less than the civil year in Jan/Feb).
    pub year: i32,
    /// Meeus-adjusted month (13 or 14 for Jan/Feb).
    pub month: u32,
    /// Julian Date (UT).
    pub jd: f64,
    /// Julian centuries since J2000.0.
    pub centuries: f64,
    /// Greenwich Mean Sidereal Time, degrees in [0, 360).
    pub gmst_deg: f64,
    /// Local Sidereal Time, degrees, not normalized.
    pub lst_deg: f64,
    /// Clock angle minus GMST, degrees.
    pub clock_offset_deg: f64,
}

impl SiderealTime {
    /// Run the full civil → JD → GMST → LST chain.
    pub fn compute(instant: &CivilInstant, longitude_east_deg: f64) -> Self {
        let (year, month) = instant.adjusted_year_month();
        let jd = julian_date(
            year,
            month,
            instant.day,
            instant.hour,
            instant.minute,
            instant.second,
        );
        let centuries = julian_centuries(jd);
        let gmst = gmst_deg(centuries, jd);
        Self {
            year,
            month,
            jd,
            centuries,
            gmst_deg: gmst,
            lst_deg: local_sidereal_time_deg(gmst, longitude_east_deg),
            clock_offset_deg: clock_offset_deg(
                instant.hour,
                instant.minute,
                instant.second,
                gmst,
            ),
        }
    }

    /// Year used for precession (the Meeus-adjusted year).
    pub fn precession_year(&self) -> f64 {
        self.year as f64
    }
}
