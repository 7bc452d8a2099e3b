//! Catalog-driven pointing for a single observer.
//!
//! Picks a visible object close to the zenith from a J2000 star catalog,
//! then derives its refracted altitude, apparent RA/Dec and rise/set times.
//!
//! ```text
//! Catalog ──► ObjectSelector ──► apparent_altitude ──► equatorial_from_horizontal
//!                  ▲                                       │
//!              RunContext (observer + sidereal time)       ▼
//!                                                     rise_set ──► Observation
//! ```

pub mod catalog;
pub mod error;
pub mod observe;
pub mod observer;
pub mod riseset;
pub mod select;

pub use catalog::{Catalog, CatalogEntry, CatalogRecord};
pub use error::CatalogError;
pub use observe::{ApparentPosition, Observation, apparent_position, observe};
pub use observer::{DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG, Observer, RunContext};
pub use riseset::{LOCAL_TIME_OFFSET_DEG, RiseSetResult, RiseSetTimes, rise_set};
pub use select::{ObjectSelector, SelectionResult, VISIBILITY_THRESHOLD_DEG};
