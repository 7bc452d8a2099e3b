//! Civil time to Julian Date and sidereal time.
//!
//! This crate provides:
//! - Julian Date from a (Meeus-adjusted) civil calendar date
//! - Greenwich Mean Sidereal Time and Local Sidereal Time in degrees
//! - The clock offset (`diff`) consumed by rise/set estimation
//! - A text snapshot of a computed time state that can be restored later

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod snapshot;

pub use civil::CivilInstant;
pub use error::TimeError;
pub use julian::{J2000_JD, julian_centuries, julian_date, meeus_adjust};
pub use sidereal::{
    SiderealTime, clock_angle_deg, clock_offset_deg, gmst_deg, local_sidereal_time_deg,
};
pub use snapshot::SiderealSnapshot;
