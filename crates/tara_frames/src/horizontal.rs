//! Equatorial (hour angle, declination) ↔ horizontal (altitude, azimuth).
//!
//! Azimuth is measured from north through east. The forward transform is
//! Meeus eq. 13.5/13.6 with the south-based azimuth shifted by 180°.

use std::f64::consts::PI;

use crate::angle::normalize_360;
use crate::coords::{Equatorial, Horizontal};

/// Hour angle in degrees: `LST − RA`. Not normalized.
pub fn hour_angle_deg(lst_deg: f64, ra_deg: f64) -> f64 {
    lst_deg - ra_deg
}

/// Altitude and azimuth of an object at hour angle `ha_deg` and declination
/// `dec_deg`, seen from latitude `lat_deg`.
///
/// - `A = 180° + atan2(sin H, cos H·sin φ − tan δ·cos φ)`
/// - `h = asin(sin φ·sin δ + cos H·cos δ·cos φ)`
pub fn horizontal_from_equatorial(ha_deg: f64, dec_deg: f64, lat_deg: f64) -> Horizontal {
    let h = ha_deg.to_radians();
    let d = dec_deg.to_radians();
    let l = lat_deg.to_radians();

    let azimuth = PI + h.sin().atan2(h.cos() * l.sin() - d.tan() * l.cos());
    let altitude = (l.sin() * d.sin() + h.cos() * d.cos() * l.cos()).asin();

    Horizontal {
        alt_deg: altitude.to_degrees(),
        az_deg: normalize_360(azimuth.to_degrees()),
    }
}

/// Right ascension and declination of a point at `alt_deg`/`az_deg`, given
/// latitude and local sidereal time.
///
/// - `δ = asin(sin h·sin φ + cos h·cos A·cos φ)`
/// - `H' = asin(sin A·cos h / cos δ)`
/// - `α = LST − (360° − H')`, wrapped into [0, 360)
///
/// The hour angle comes back through `asin`, so this inverts
/// [`horizontal_from_equatorial`] only for hour angles within ±90° of the
/// meridian (objects on the rising side in the pointing use case). Farther
/// out the result is mirrored about the six-hour circle.
pub fn equatorial_from_horizontal(
    alt_deg: f64,
    az_deg: f64,
    lat_deg: f64,
    lst_deg: f64,
) -> Equatorial {
    let alt = alt_deg.to_radians();
    let az = az_deg.to_radians();
    let l = lat_deg.to_radians();

    let dec = (alt.sin() * l.sin() + alt.cos() * az.cos() * l.cos()).asin();
    let h = (az.sin() * alt.cos() / dec.cos()).asin();

    Equatorial::new(lst_deg - (360.0 - h.to_degrees()), dec.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn angular_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn zenith_at_equator() {
        let hz = horizontal_from_equatorial(0.0, 0.0, 0.0);
        assert!((hz.alt_deg - 90.0).abs() < EPS);
    }

    #[test]
    fn meridian_transit_is_due_south() {
        let hz = horizontal_from_equatorial(0.0, 0.0, 45.0);
        assert!((hz.alt_deg - 45.0).abs() < EPS);
        assert!((hz.az_deg - 180.0).abs() < EPS);
    }

    #[test]
    fn rising_on_equator_is_due_east() {
        let hz = horizontal_from_equatorial(-90.0, 0.0, 0.0);
        assert!(hz.alt_deg.abs() < EPS);
        assert!((hz.az_deg - 90.0).abs() < EPS);
    }

    #[test]
    fn setting_on_equator_is_due_west() {
        let hz = horizontal_from_equatorial(90.0, 0.0, 0.0);
        assert!((hz.az_deg - 270.0).abs() < EPS);
    }

    #[test]
    fn southern_observer_sees_south_pole_star_at_latitude() {
        // δ Oct sits near the south celestial pole; its altitude ≈ |φ|
        let hz = horizontal_from_equatorial(37.0, -89.9, -31.08);
        assert!((hz.alt_deg - 31.08).abs() < 0.2, "alt = {}", hz.alt_deg);
    }

    #[test]
    fn azimuth_in_range() {
        for ha in (-360..=360).step_by(15) {
            let hz = horizontal_from_equatorial(ha as f64, 20.0, -31.08);
            assert!((0.0..360.0).contains(&hz.az_deg), "az = {}", hz.az_deg);
        }
    }

    #[test]
    fn hour_angle_is_plain_difference() {
        assert_eq!(hour_angle_deg(429.977, 186.65), 429.977 - 186.65);
    }

    #[test]
    fn roundtrip_east_of_meridian() {
        let lat = -31.08;
        let lst = 100.0;
        for &(ra, dec) in &[(130.0, -20.0), (110.0, 5.0), (175.0, -60.0), (150.0, 30.0)] {
            let hz = horizontal_from_equatorial(hour_angle_deg(lst, ra), dec, lat);
            let back = equatorial_from_horizontal(hz.alt_deg, hz.az_deg, lat, lst);
            assert!(angular_diff(back.ra_deg, ra) < 1e-6, "ra {ra} → {}", back.ra_deg);
            assert!((back.dec_deg - dec).abs() < 1e-6, "dec {dec} → {}", back.dec_deg);
        }
    }

    #[test]
    fn inverse_mirrors_far_from_meridian() {
        let lat = -31.08;
        let lst = 100.0;
        let ra = 220.0; // H = -120°
        let dec = -70.0;
        let hz = horizontal_from_equatorial(hour_angle_deg(lst, ra), dec, lat);
        let back = equatorial_from_horizontal(hz.alt_deg, hz.az_deg, lat, lst);
        assert!((back.dec_deg - dec).abs() < 1e-6);
        assert!(angular_diff(back.ra_deg, ra) > 1.0, "ra = {}", back.ra_deg);
    }
}
