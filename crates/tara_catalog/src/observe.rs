//! Full observation run: select, refract, back-convert, rise/set.

use serde::Serialize;
use tara_frames::{
    Equatorial, Horizontal, apparent_altitude, apply_precession, equatorial_from_horizontal,
    horizontal_from_equatorial, hour_angle_deg,
};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::observer::RunContext;
use crate::riseset::{RiseSetResult, rise_set};
use crate::select::{ObjectSelector, SelectionResult};

/// Result of one observation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub selection: SelectionResult,
    /// Altitude including atmospheric refraction, degrees.
    pub refracted_alt_deg: f64,
    /// RA/Dec recovered from the refracted altitude and true azimuth.
    pub apparent: Equatorial,
    pub rise_set: RiseSetResult,
}

/// A single coordinate carried through precession, the horizontal
/// transform and refraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApparentPosition {
    pub precessed: Equatorial,
    /// True (geometric) horizontal position.
    pub horizontal: Horizontal,
    pub refracted_alt_deg: f64,
    pub apparent: Equatorial,
}

/// Run the selector and finish the pipeline for the winning object.
///
/// # Errors
/// Selection errors, or a refraction domain error.
pub fn observe(
    catalog: &Catalog,
    ctx: &RunContext,
    selector: &ObjectSelector,
) -> Result<Observation, CatalogError> {
    let selection = selector.select(catalog, ctx)?;
    let refracted_alt_deg = apparent_altitude(selection.horizontal.alt_deg)?;
    let apparent = equatorial_from_horizontal(
        refracted_alt_deg,
        selection.horizontal.az_deg,
        ctx.latitude_deg(),
        ctx.lst_deg(),
    );
    let rise_set = rise_set(
        selection.precessed,
        ctx.latitude_deg(),
        ctx.time.clock_offset_deg,
    );

    debug!(
        name = %selection.entry.name,
        refracted_alt_deg,
        apparent_ra_deg = apparent.ra_deg,
        apparent_dec_deg = apparent.dec_deg,
        "observation complete"
    );

    Ok(Observation {
        selection,
        refracted_alt_deg,
        apparent,
        rise_set,
    })
}

/// Apparent place of an arbitrary J2000 coordinate for this run.
///
/// # Errors
/// [`CatalogError::Frame`] if the object is below the horizon, where the
/// refraction formula is not defined.
pub fn apparent_position(
    j2000: Equatorial,
    ctx: &RunContext,
) -> Result<ApparentPosition, CatalogError> {
    let precessed = apply_precession(j2000, ctx.precession_year());
    let ha = hour_angle_deg(ctx.lst_deg(), precessed.ra_deg);
    let horizontal = horizontal_from_equatorial(ha, precessed.dec_deg, ctx.latitude_deg());
    let refracted_alt_deg = apparent_altitude(horizontal.alt_deg)?;
    let apparent = equatorial_from_horizontal(
        refracted_alt_deg,
        horizontal.az_deg,
        ctx.latitude_deg(),
        ctx.lst_deg(),
    );
    Ok(ApparentPosition {
        precessed,
        horizontal,
        refracted_alt_deg,
        apparent,
    })
}
