//! Catalog files, observer config and time sources.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Timelike, Utc};
use serde_json::{Map, Value};
use tara_catalog::{Catalog, CatalogRecord, Observer};
use tara_time::{CivilInstant, SiderealSnapshot, SiderealTime};
use tracing::{debug, info};

/// Parse a catalog document: a JSON object `name → {RA, DEC, NDEC}`.
///
/// Object order is preserved so declination ties resolve in file order.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let map: Map<String, Value> =
        serde_json::from_str(json).context("catalog must be a JSON object")?;
    let mut records = Vec::with_capacity(map.len());
    for (name, value) in map {
        let record: CatalogRecord = serde_json::from_value(value)
            .with_context(|| format!("catalog entry '{name}' is missing RA, DEC or NDEC"))?;
        records.push((name, record));
    }
    Ok(Catalog::from_records(records)?)
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = parse_catalog(&text)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    info!(path = %path.display(), entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Observer site from an optional config file, then flag overrides.
pub fn resolve_observer(
    config: Option<&Path>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> Result<Observer> {
    let mut observer: Observer = match config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read observer config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid observer config {}", path.display()))?
        }
        None => Observer::default(),
    };
    if let Some(lat) = lat {
        observer.latitude_deg = lat;
    }
    if let Some(lon) = lon {
        observer.longitude_deg = lon;
    }
    if !(-90.0..=90.0).contains(&observer.latitude_deg) {
        bail!("latitude {} outside [-90, 90]", observer.latitude_deg);
    }
    debug!(
        latitude_deg = observer.latitude_deg,
        longitude_deg = observer.longitude_deg,
        "observer"
    );
    Ok(observer)
}

/// Current UTC time from the system clock.
pub fn civil_now() -> CivilInstant {
    let now = Utc::now();
    CivilInstant::new(
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second() as f64 + f64::from(now.nanosecond()) / 1e9,
    )
}

/// Where the run's sidereal state comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeSource {
    Civil(CivilInstant),
    Snapshot(SiderealSnapshot),
}

impl TimeSource {
    /// `--snapshot` wins over `--date`; neither means the system clock.
    pub fn from_args(date: Option<&str>, snapshot: Option<&str>) -> Result<Self> {
        if let Some(s) = snapshot {
            let snap: SiderealSnapshot = s.parse().context("invalid --snapshot")?;
            return Ok(Self::Snapshot(snap));
        }
        let instant: CivilInstant = match date {
            Some(d) => d.parse().context("invalid --date")?,
            None => civil_now(),
        };
        Ok(Self::Civil(instant))
    }

    /// Sidereal state at `longitude_deg`. A snapshot carries its own LST
    /// and ignores the longitude.
    pub fn sidereal_time(&self, longitude_deg: f64) -> SiderealTime {
        match self {
            Self::Civil(instant) => SiderealTime::compute(instant, longitude_deg),
            Self::Snapshot(snap) => snap.sidereal_time(),
        }
    }

    pub fn snapshot(&self, time: &SiderealTime) -> SiderealSnapshot {
        match self {
            Self::Civil(instant) => SiderealSnapshot::capture(instant, time),
            Self::Snapshot(snap) => *snap,
        }
    }
}
