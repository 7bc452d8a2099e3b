//! Annual precession of J2000 catalog coordinates.
//!
//! Low-precision linear model: RA drift `m + nₛ·sin α·tan δ` (seconds of
//! time) and Dec drift `n·cos α` (arcseconds), with slowly varying rates.
//! Adequate for a few decades either side of J2000; poor near the poles
//! where `tan δ` diverges.
//!
//! Source: Meeus, _Astronomical Algorithms_, eq. 21.1 with annual rates
//! scaled by elapsed years.
//!
//! The corrector returns deltas rather than absolute angles. Catalog
//! coordinates are nudged, not recomputed.

use serde::{Deserialize, Serialize};

use crate::coords::Equatorial;

/// Reference epoch year of the catalog coordinates.
pub const EPOCH_YEAR: f64 = 2000.0;

/// Precession correction for one object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrecessionDelta {
    /// Right ascension correction in seconds of time.
    pub ra_seconds: f64,
    /// Declination correction in arcseconds.
    pub dec_arcsec: f64,
}

impl PrecessionDelta {
    /// RA correction in degrees (15″ of arc per second of time).
    pub fn ra_deg(&self) -> f64 {
        self.ra_seconds * 15.0 / 3600.0
    }

    /// Dec correction in degrees.
    pub fn dec_deg(&self) -> f64 {
        self.dec_arcsec / 3600.0
    }
}

/// Precession deltas for a J2000 position carried to `target_year`.
///
/// With `t = target_year − 2000`:
/// - `m  = (3.0749  + 0.0000186·t)·t`
/// - `n  = (20.043  − 0.000085·t)·t`
/// - `nₛ = (1.3362  − 0.0000056·t)·t`
/// - `ΔRA = m + nₛ·sin α·tan δ`, `ΔDec = n·cos α`
pub fn precess(ra_deg: f64, dec_deg: f64, target_year: f64) -> PrecessionDelta {
    let t = target_year - EPOCH_YEAR;
    let m = (3.0749 + 0.000_018_6 * t) * t;
    let n = (20.043 - 0.000_085 * t) * t;
    let ns = (1.3362 - 0.000_005_6 * t) * t;
    let ra = ra_deg.to_radians();
    let dec = dec_deg.to_radians();
    PrecessionDelta {
        ra_seconds: m + ns * ra.sin() * dec.tan(),
        dec_arcsec: n * ra.cos(),
    }
}

/// Carry a J2000 coordinate to `target_year`, RA and Dec together.
pub fn apply_precession(j2000: Equatorial, target_year: f64) -> Equatorial {
    let delta = precess(j2000.ra_deg, j2000.dec_deg, target_year);
    Equatorial::new(
        j2000.ra_deg + delta.ra_deg(),
        j2000.dec_deg + delta.dec_deg(),
    )
}
