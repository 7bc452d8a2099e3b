//! In-memory star catalog.
//!
//! A catalog is an ordered list of named J2000 positions. Records arrive in
//! the compact sexagesimal form of the source file and are decoded once on
//! load; the catalog is read-only afterwards and can be shared between
//! threads.

use serde::{Deserialize, Serialize};
use tara_frames::{Equatorial, Sexagesimal};

use crate::error::CatalogError;

/// One record as it appears in the catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Right ascension, `HHMMSS.ss`.
    #[serde(rename = "RA")]
    pub ra: String,
    /// Declination, `±DDMMSS`.
    #[serde(rename = "DEC")]
    pub dec: String,
    /// Numeric declination, used only as the selection sort key.
    #[serde(rename = "NDEC")]
    pub ndec: f64,
}

/// A decoded catalog object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Position at epoch J2000.
    pub j2000: Equatorial,
    /// Declination value the catalog supplies for ordering.
    pub dec_magnitude: f64,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, j2000: Equatorial, dec_magnitude: f64) -> Self {
        Self {
            name: name.into(),
            j2000,
            dec_magnitude,
        }
    }

    /// Decode a source record.
    pub fn from_record(name: &str, record: &CatalogRecord) -> Result<Self, CatalogError> {
        let malformed = |source| CatalogError::MalformedCatalogEntry {
            name: name.to_string(),
            source,
        };
        let ra_hours = Sexagesimal::parse_compact_hms(&record.ra).map_err(malformed)?;
        let dec = Sexagesimal::parse_compact_dms(&record.dec).map_err(malformed)?;
        Ok(Self::new(
            name,
            Equatorial::new(ra_hours.to_decimal() * 15.0, dec.to_decimal()),
            record.ndec,
        ))
    }

    /// Sort key for the zenith-proximity scan.
    pub fn sort_key(&self) -> f64 {
        self.dec_magnitude.abs()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Decode `(name, record)` pairs in source order.
    ///
    /// Stops at the first malformed record.
    pub fn from_records<I, S>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, CatalogRecord)>,
        S: AsRef<str>,
    {
        let entries = records
            .into_iter()
            .map(|(name, record)| CatalogEntry::from_record(name.as_ref(), &record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Entries ordered by ascending |declination magnitude|.
    ///
    /// Stable: equal keys keep source order.
    pub fn by_declination_magnitude(&self) -> Vec<&CatalogEntry> {
        let mut ordered: Vec<&CatalogEntry> = self.entries.iter().collect();
        ordered.sort_by(|a, b| a.sort_key().total_cmp(&b.sort_key()));
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tara_frames::FrameError;

    fn record(ra: &str, dec: &str, ndec: f64) -> CatalogRecord {
        CatalogRecord {
            ra: ra.into(),
            dec: dec.into(),
            ndec,
        }
    }

    #[test]
    fn decode_acrux() {
        let e = CatalogEntry::from_record("Acrux", &record("122635.89", "-630556", -63.0991))
            .unwrap();
        assert!((e.j2000.ra_deg - 186.649_54).abs() < 1e-4, "ra = {}", e.j2000.ra_deg);
        assert!((e.j2000.dec_deg + 63.098_89).abs() < 1e-4, "dec = {}", e.j2000.dec_deg);
        assert_eq!(e.sort_key(), 63.0991);
    }

    #[test]
    fn malformed_field_names_entry() {
        let err = CatalogEntry::from_record("Bad", &record("12xx35.89", "-630556", 0.0))
            .unwrap_err();
        match err {
            CatalogError::MalformedCatalogEntry { name, source } => {
                assert_eq!(name, "Bad");
                assert!(matches!(source, FrameError::MalformedSexagesimal { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_records_stops_on_error() {
        let recs = vec![
            ("A", record("000000", "+100000", 10.0)),
            ("B", record("oops", "+100000", 10.0)),
        ];
        assert!(Catalog::from_records(recs).is_err());
    }

    #[test]
    fn ordering_by_absolute_declination() {
        let cat = Catalog::from_records(vec![
            ("south", record("010000", "-800000", -80.0)),
            ("north", record("020000", "+450000", 45.0)),
            ("equator", record("030000", "+000000", 0.0)),
        ])
        .unwrap();
        let names: Vec<&str> = cat
            .by_declination_magnitude()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["equator", "north", "south"]);
    }

    #[test]
    fn ordering_is_stable_on_ties() {
        // Duplicate magnitudes (including opposite signs) keep source order
        let cat = Catalog::from_records(vec![
            ("first", record("010000", "-300000", -30.0)),
            ("low", record("020000", "+050000", 5.0)),
            ("second", record("030000", "+300000", 30.0)),
            ("third", record("040000", "-300000", -30.0)),
        ])
        .unwrap();
        let names: Vec<&str> = cat
            .by_declination_magnitude()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["low", "first", "second", "third"]);
    }

    #[test]
    fn record_json_shape() {
        let r: CatalogRecord =
            serde_json::from_str(r#"{"RA": "064508.92", "DEC": "-164258", "NDEC": -16.7161}"#)
                .unwrap();
        assert_eq!(r, record("064508.92", "-164258", -16.7161));
    }

    #[test]
    fn lookup_by_name() {
        let cat = Catalog::new(vec![CatalogEntry::new(
            "Vega",
            Equatorial::new(279.23, 38.78),
            38.78,
        )]);
        assert!(cat.get("Vega").is_some());
        assert!(cat.get("Deneb").is_none());
        assert_eq!(cat.len(), 1);
        assert!(!cat.is_empty());
    }
}
