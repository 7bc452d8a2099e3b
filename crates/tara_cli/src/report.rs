//! Human-readable and JSON output.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use tara_catalog::{ApparentPosition, Observation, RiseSetResult};
use tara_frames::{Equatorial, Horizontal, Sexagesimal, TrackedPosition, normalize_360};
use tara_time::{SiderealSnapshot, SiderealTime};

/// `time` subcommand payload.
#[derive(Debug, Serialize)]
pub struct TimeReport {
    pub sidereal: SiderealTime,
    pub snapshot: String,
}

impl TimeReport {
    pub fn new(sidereal: SiderealTime, snapshot: &SiderealSnapshot) -> Self {
        Self {
            sidereal,
            snapshot: snapshot.to_string(),
        }
    }
}

/// Writes one `RA … Dec …` line.
fn write_radec(f: &mut Formatter<'_>, label: &str, eq: &Equatorial) -> fmt::Result {
    writeln!(
        f,
        "{label:<12} RA {}  Dec {}",
        eq.ra_hms().format_hms(),
        eq.dec_dms()
    )
}

fn write_horizontal(f: &mut Formatter<'_>, h: &Horizontal, refracted_alt_deg: f64) -> fmt::Result {
    writeln!(f, "{:<12} Alt {:.4}°  Az {:.4}°", "Horizontal", h.alt_deg, h.az_deg)?;
    writeln!(f, "{:<12} Alt {:.4}°", "Refracted", refracted_alt_deg)
}

fn write_rise_set(f: &mut Formatter<'_>, rs: &RiseSetResult) -> fmt::Result {
    match rs.times() {
        Some(t) => {
            writeln!(f, "{:<12} {}", "Rise", t.rise_hms().format_hms())?;
            writeln!(f, "{:<12} {}", "Set", t.set_hms().format_hms())
        }
        None => {
            writeln!(f, "{:<12} Never", "Rise")?;
            writeln!(f, "{:<12} Never", "Set")
        }
    }
}

/// Text form of an [`Observation`].
pub struct ObservationText<'a>(pub &'a Observation);

impl Display for ObservationText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let obs = self.0;
        let sel = &obs.selection;
        writeln!(f, "{:<12} {}", "Object", sel.entry.name)?;
        write_radec(f, "J2000", &sel.entry.j2000)?;
        write_radec(f, "Corrected", &sel.precessed)?;
        write_horizontal(f, &sel.horizontal, obs.refracted_alt_deg)?;
        write_radec(f, "Apparent", &obs.apparent)?;
        write_rise_set(f, &obs.rise_set)
    }
}

/// Text form of an [`ApparentPosition`].
pub struct PositionText<'a>(pub &'a ApparentPosition);

impl Display for PositionText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pos = self.0;
        write_radec(f, "Corrected", &pos.precessed)?;
        write_horizontal(f, &pos.horizontal, pos.refracted_alt_deg)?;
        write_radec(f, "Apparent", &pos.apparent)
    }
}

impl Display for TimeReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let st = &self.sidereal;
        let lst_hours = Sexagesimal::from_decimal(normalize_360(st.lst_deg) / 15.0);
        writeln!(f, "{:<12} {:.6}", "JD", st.jd)?;
        writeln!(f, "{:<12} {:.12}", "T", st.centuries)?;
        writeln!(f, "{:<12} {:.6}°", "GMST", st.gmst_deg)?;
        writeln!(
            f,
            "{:<12} {:.6}°  ({})",
            "LST",
            st.lst_deg,
            lst_hours.format_hms()
        )?;
        writeln!(f, "{:<12} {:.6}°", "Clock diff", st.clock_offset_deg)?;
        writeln!(f, "{:<12} {}", "Snapshot", self.snapshot)
    }
}

/// One line per tracking tick.
pub fn track_line(elapsed_seconds: f64, pos: &TrackedPosition) -> String {
    format!(
        "t+{elapsed_seconds:>7.0}s  LST {:>9.4}°  HA {:>9.4}°  Alt {:>8.4}°  Az {:>8.4}°{}",
        pos.lst_deg,
        pos.ha_deg,
        pos.horizontal.alt_deg,
        pos.horizontal.az_deg,
        if pos.is_above_horizon() { "" } else { "  (below horizon)" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tara_catalog::{Catalog, CatalogEntry, ObjectSelector, Observer, RunContext, observe};
    use tara_time::CivilInstant;

    fn sample_observation() -> Observation {
        let cat = Catalog::new(vec![CatalogEntry::new(
            "Sirius",
            Equatorial::new(101.287, -16.716),
            -16.716,
        )]);
        let ctx = RunContext::from_sidereal(
            Observer::default(),
            SiderealTime {
                year: 2022,
                month: 7,
                jd: 2_459_761.5,
                centuries: 0.2249,
                gmst_deg: 0.0,
                lst_deg: 100.0,
                clock_offset_deg: -10.0,
            },
        );
        observe(&cat, &ctx, &ObjectSelector::default()).unwrap()
    }

    #[test]
    fn observation_lists_every_field() {
        let text = ObservationText(&sample_observation()).to_string();
        let labels = [
            "Object",
            "J2000",
            "Corrected",
            "Horizontal",
            "Refracted",
            "Apparent",
            "Rise",
            "Set",
        ];
        for label in labels {
            assert!(text.contains(label), "missing {label}:\n{text}");
        }
        assert!(text.contains("Sirius"));
        assert!(text.contains("RA 6h 45m"));
    }

    #[test]
    fn never_is_printed_for_both_events() {
        let mut obs = sample_observation();
        obs.rise_set = RiseSetResult::Never;
        let text = ObservationText(&obs).to_string();
        assert_eq!(text.matches("Never").count(), 2);
    }

    #[test]
    fn time_report_shows_snapshot() {
        let instant = CivilInstant::new(2022, 7, 1, 0, 0, 0.0);
        let st = SiderealTime::compute(&instant, 150.944_799);
        let report = TimeReport::new(st, &SiderealSnapshot::capture(&instant, &st));
        let text = report.to_string();
        assert!(text.contains("2459761.500000"));
        assert!(text.contains("2022|7|1|0|0|0|"));
    }

    #[test]
    fn position_text_has_four_lines() {
        let obs = sample_observation();
        let pos = ApparentPosition {
            precessed: obs.selection.precessed,
            horizontal: obs.selection.horizontal,
            refracted_alt_deg: obs.refracted_alt_deg,
            apparent: obs.apparent,
        };
        let text = PositionText(&pos).to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("Corrected"));
    }
}
