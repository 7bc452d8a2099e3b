//! Atmospheric refraction (Bennett 1982).
//!
//! `R = 1.02 / tan(h + 10.3/(h + 5.11))`, `h` in degrees, and the apparent
//! altitude is `h + R/3600`. The formula has a pole at `h = −5.11°`, so it
//! is only accepted for altitudes between the horizon and the zenith.

use crate::error::FrameError;

/// Bennett refraction term `R` for a true altitude.
fn bennett(alt_deg: f64) -> f64 {
    1.02 / (alt_deg + 10.3 / (alt_deg + 5.11)).to_radians().tan()
}

fn check_domain(alt_deg: f64) -> Result<(), FrameError> {
    if alt_deg.is_finite() && (0.0..=90.0).contains(&alt_deg) {
        Ok(())
    } else {
        Err(FrameError::RefractionDomain {
            altitude_deg: alt_deg,
        })
    }
}

/// Apparent altitude for a true altitude in [0°, 90°].
pub fn apparent_altitude(true_alt_deg: f64) -> Result<f64, FrameError> {
    check_domain(true_alt_deg)?;
    Ok(true_alt_deg + bennett(true_alt_deg) / 3600.0)
}

/// Refraction lift `apparent − true`, in arcseconds.
pub fn refraction_arcsec(true_alt_deg: f64) -> Result<f64, FrameError> {
    check_domain(true_alt_deg)?;
    Ok(bennett(true_alt_deg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zenith_is_nearly_unchanged() {
        let a = apparent_altitude(90.0).unwrap();
        assert!((a - 90.0).abs() < 1e-5, "apparent(90) = {a}");
    }

    #[test]
    fn raises_objects_above_horizon() {
        for alt in [1.0, 10.0, 20.0, 45.0, 80.0] {
            let a = apparent_altitude(alt).unwrap();
            assert!(a > alt, "apparent({alt}) = {a}");
        }
    }

    #[test]
    fn lift_decreases_with_altitude() {
        let mut prev = f64::INFINITY;
        for alt in (0..=85).step_by(5) {
            let r = refraction_arcsec(alt as f64).unwrap();
            assert!(r < prev, "R({alt}) = {r} not below {prev}");
            prev = r;
        }
    }

    #[test]
    fn horizon_value() {
        // R(0) = 1.02 / tan(10.3/5.11 °) ≈ 28.98
        let r = refraction_arcsec(0.0).unwrap();
        assert!((r - 28.98).abs() < 0.05, "R(0) = {r}");
    }

    #[test]
    fn negative_altitude_rejected() {
        let err = apparent_altitude(-1.0).unwrap_err();
        assert_eq!(err, FrameError::RefractionDomain { altitude_deg: -1.0 });
    }

    #[test]
    fn beyond_zenith_and_nan_rejected() {
        assert!(apparent_altitude(90.5).is_err());
        assert!(apparent_altitude(f64::NAN).is_err());
        assert!(refraction_arcsec(f64::INFINITY).is_err());
    }
}
