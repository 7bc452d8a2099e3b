//! Coordinate frames for pointing at catalog objects.
//!
//! Provides epoch precession of J2000 catalog coordinates, the
//! equatorial ↔ horizontal transform, Bennett refraction, sexagesimal
//! values, and a tracked position that follows an object as sidereal time
//! advances.
//!
//! All angles are degrees unless a name says otherwise.

pub mod angle;
pub mod coords;
pub mod error;
pub mod horizontal;
pub mod precession;
pub mod refraction;
pub mod sexagesimal;
pub mod tracking;

pub use angle::normalize_360;
pub use coords::{Equatorial, Horizontal};
pub use error::FrameError;
pub use horizontal::{equatorial_from_horizontal, horizontal_from_equatorial, hour_angle_deg};
pub use precession::{PrecessionDelta, apply_precession, precess};
pub use refraction::{apparent_altitude, refraction_arcsec};
pub use sexagesimal::Sexagesimal;
pub use tracking::{LST_DEG_PER_SECOND, TrackedPosition};
