//! Pick a currently visible catalog object near the zenith.
//!
//! Entries are scanned in ascending |declination| order. Each is precessed
//! to the run year, placed on the sky at the run's LST, and the first one at
//! or above the altitude threshold wins. Low-declination objects culminate
//! across a wide band of hour angles for mid-latitude sites, so this order
//! usually finds a candidate within the first few entries. It is a
//! heuristic: the winner is not necessarily the object closest to the
//! zenith.

use serde::Serialize;
use tara_frames::{
    Equatorial, Horizontal, apply_precession, horizontal_from_equatorial, hour_angle_deg,
};
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::CatalogError;
use crate::observer::RunContext;

/// Minimum true altitude for an object to count as visible, degrees.
pub const VISIBILITY_THRESHOLD_DEG: f64 = 20.0;

/// The object a scan settled on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionResult {
    pub entry: CatalogEntry,
    /// Coordinates precessed to the run year.
    pub precessed: Equatorial,
    /// True (unrefracted) altitude and azimuth at the run's LST.
    pub horizontal: Horizontal,
    /// Position in the declination-ordered scan, 0-based.
    pub scan_index: usize,
}

/// Scan parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectSelector {
    /// Altitude an object must reach, degrees.
    pub min_altitude_deg: f64,
    /// Upper bound on entries examined; `None` scans the whole catalog.
    pub max_scan: Option<usize>,
}

impl Default for ObjectSelector {
    fn default() -> Self {
        Self {
            min_altitude_deg: VISIBILITY_THRESHOLD_DEG,
            max_scan: None,
        }
    }
}

impl ObjectSelector {
    /// Precess one entry and place it on the observer's sky.
    pub fn place(entry: &CatalogEntry, ctx: &RunContext) -> (Equatorial, Horizontal) {
        let precessed = apply_precession(entry.j2000, ctx.precession_year());
        let ha = hour_angle_deg(ctx.lst_deg(), precessed.ra_deg);
        let horizontal = horizontal_from_equatorial(ha, precessed.dec_deg, ctx.latitude_deg());
        (precessed, horizontal)
    }

    /// Return the first entry, in declination order, at or above the
    /// threshold.
    ///
    /// # Errors
    /// [`CatalogError::NoVisibleObject`] if the scan limit is reached first,
    /// including for an empty catalog.
    pub fn select(
        &self,
        catalog: &Catalog,
        ctx: &RunContext,
    ) -> Result<SelectionResult, CatalogError> {
        let ordered = catalog.by_declination_magnitude();
        let limit = self.max_scan.map_or(ordered.len(), |m| m.min(ordered.len()));

        for (scan_index, entry) in ordered.into_iter().take(limit).enumerate() {
            let (precessed, horizontal) = Self::place(entry, ctx);
            debug!(
                name = %entry.name,
                scan_index,
                alt_deg = horizontal.alt_deg,
                az_deg = horizontal.az_deg,
                "candidate"
            );
            if horizontal.alt_deg >= self.min_altitude_deg {
                info!(
                    name = %entry.name,
                    scan_index,
                    alt_deg = horizontal.alt_deg,
                    "selected"
                );
                return Ok(SelectionResult {
                    entry: entry.clone(),
                    precessed,
                    horizontal,
                    scan_index,
                });
            }
        }

        warn!(
            scanned = limit,
            min_altitude_deg = self.min_altitude_deg,
            "no catalog object above threshold"
        );
        Err(CatalogError::NoVisibleObject {
            scanned: limit,
            min_altitude_deg: self.min_altitude_deg,
        })
    }
}
