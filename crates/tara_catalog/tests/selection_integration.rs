//! End-to-end runs over small catalogs.

use serde_json::{Map, Value};
use tara_catalog::{
    Catalog, CatalogEntry, CatalogError, CatalogRecord, ObjectSelector, Observer, RiseSetResult,
    RunContext, observe,
};
use tara_frames::Equatorial;
use tara_time::{CivilInstant, SiderealTime};

const BRIGHT_STARS: &str = r#"{
    "Polaris":    {"RA": "023149.09", "DEC": "+891551", "NDEC": 89.2642},
    "Canopus":    {"RA": "062357.11", "DEC": "-524145", "NDEC": -52.6958},
    "Rigel":      {"RA": "051432.27", "DEC": "-081205", "NDEC": -8.2014},
    "Betelgeuse": {"RA": "055510.31", "DEC": "+072425", "NDEC": 7.407},
    "Sadalmelik": {"RA": "220547.04", "DEC": "-001911", "NDEC": -0.3197}
}"#;

fn load(json: &str) -> Catalog {
    let map: Map<String, Value> = serde_json::from_str(json).unwrap();
    Catalog::from_records(
        map.into_iter()
            .map(|(name, v)| (name, serde_json::from_value::<CatalogRecord>(v).unwrap())),
    )
    .unwrap()
}

fn siding_spring_2022() -> RunContext {
    let instant: CivilInstant = "2022-07-01T00:00:00Z".parse().unwrap();
    RunContext::new(Observer::default(), &instant)
}

#[test]
fn run_context_reference_values() {
    let ctx = siding_spring_2022();
    assert_eq!(ctx.time.jd, 2_459_761.5);
    assert!((ctx.time.gmst_deg - 279.0322).abs() < 1e-3);
    assert_eq!(ctx.lst_deg(), ctx.time.gmst_deg + 150.944_799);
}

#[test]
fn skips_set_object_and_picks_next_by_declination() {
    // LST ≈ 70°: Sadalmelik sorts first but is ~100° west and below the
    // horizon; Betelgeuse is next in order and well up.
    let catalog = load(BRIGHT_STARS);
    let ctx = siding_spring_2022();
    let obs = observe(&catalog, &ctx, &ObjectSelector::default()).unwrap();

    assert_eq!(obs.selection.entry.name, "Betelgeuse");
    assert_eq!(obs.selection.scan_index, 1);
    assert!(obs.selection.horizontal.alt_deg >= 20.0);
    assert!(obs.refracted_alt_deg > obs.selection.horizontal.alt_deg);
    assert!(matches!(obs.rise_set, RiseSetResult::Times(_)));
}

#[test]
fn selector_fixture_at_equator() {
    // Declinations {0°, 45°, -80°} seen from latitude 0 at LST 0: only the
    // 45° object clears 20° even though the 0° object sorts first.
    let catalog = Catalog::new(vec![
        CatalogEntry::new("zero", Equatorial::new(100.0, 0.0), 0.0),
        CatalogEntry::new("forty_five", Equatorial::new(0.0, 45.0), 45.0),
        CatalogEntry::new("minus_eighty", Equatorial::new(0.0, -80.0), -80.0),
    ]);
    let ctx = RunContext::from_sidereal(
        Observer::new(0.0, 0.0),
        SiderealTime {
            year: 2000,
            month: 1,
            jd: 2_451_545.0,
            centuries: 0.0,
            gmst_deg: 0.0,
            lst_deg: 0.0,
            clock_offset_deg: 0.0,
        },
    );
    let result = ObjectSelector::default().select(&catalog, &ctx).unwrap();
    assert_eq!(result.entry.name, "forty_five");
}

#[test]
fn json_ties_keep_file_order() {
    // Both are on the meridian at the same declination; file order decides
    let json = r#"{
        "zeta":  {"RA": "044000.00", "DEC": "-300000", "NDEC": -30.0},
        "alpha": {"RA": "044000.00", "DEC": "-300000", "NDEC": -30.0}
    }"#;
    let catalog = load(json);
    let ctx = RunContext::from_sidereal(
        Observer::new(-31.08, 0.0),
        SiderealTime {
            year: 2000,
            month: 1,
            jd: 2_451_545.0,
            centuries: 0.0,
            gmst_deg: 70.0,
            lst_deg: 70.0,
            clock_offset_deg: 0.0,
        },
    );
    let result = ObjectSelector::default().select(&catalog, &ctx).unwrap();
    assert_eq!(result.entry.name, "zeta");
}

#[test]
fn malformed_record_reports_name() {
    let map: Map<String, Value> =
        serde_json::from_str(r#"{"Broken": {"RA": "25xx00", "DEC": "+000000", "NDEC": 0.0}}"#)
            .unwrap();
    let records = map
        .into_iter()
        .map(|(name, v)| (name, serde_json::from_value::<CatalogRecord>(v).unwrap()));
    match Catalog::from_records(records) {
        Err(CatalogError::MalformedCatalogEntry { name, .. }) => assert_eq!(name, "Broken"),
        other => panic!("expected malformed entry, got {other:?}"),
    }
}

#[test]
fn observation_serializes_to_json() {
    let obs = observe(
        &load(BRIGHT_STARS),
        &siding_spring_2022(),
        &ObjectSelector::default(),
    )
    .unwrap();
    let v = serde_json::to_value(&obs).unwrap();
    assert_eq!(v["selection"]["entry"]["name"], "Betelgeuse");
    assert!(v["rise_set"]["times"]["rise_deg"].is_f64());
}
