//! Julian Date from a Gregorian calendar date.
//!
//! Source: Meeus, _Astronomical Algorithms_, ch. 7. The month/year
//! adjustment for January and February is the caller's job; see
//! [`meeus_adjust`].

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Shift January and February to months 13 and 14 of the previous year.
///
/// Every other month passes through unchanged.
pub fn meeus_adjust(year: i32, month: u32) -> (i32, u32) {
    if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    }
}

/// Julian Date for a Gregorian calendar date and UT clock time.
///
/// `year` and `month` must already be Meeus-adjusted. This is not checked:
/// passing an unadjusted January or February date yields a JD about a year
/// off.
///
/// `JD = C + D + ⌊365.25(Y + 4716)⌋ + ⌊30.6001(M + 1)⌋ − 1524.5 + h/24 + m/1440 + s/86400`
/// with `A = ⌊Y/100⌋`, `B = ⌊A/4⌋`, `C = 2 − A + B`.
pub fn julian_date(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
    let y = year as f64;
    let a = (y / 100.0).floor();
    let b = (a / 4.0).floor();
    let c = (2.0 - a + b).floor();
    let e = (365.25 * (y + 4716.0)).floor();
    let f = (30.6001 * (month as f64 + 1.0)).floor();
    c + day as f64 + e + f - 1524.5
        + hour as f64 / 24.0
        + minute as f64 / 1440.0
        + second / 86_400.0
}

/// Julian centuries elapsed since J2000.0: `T = (JD − 2451545.0) / 36525`.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjust_january() {
        assert_eq!(meeus_adjust(2024, 1), (2023, 13));
    }

    #[test]
    fn adjust_february() {
        assert_eq!(meeus_adjust(2024, 2), (2023, 14));
    }

    #[test]
    fn adjust_march_passthrough() {
        assert_eq!(meeus_adjust(2024, 3), (2024, 3));
        assert_eq!(meeus_adjust(2024, 12), (2024, 12));
    }

    #[test]
    fn j2000_noon() {
        let (y, m) = meeus_adjust(2000, 1);
        let jd = julian_date(y, m, 1, 12, 0, 0.0);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn meeus_example_7a() {
        // Meeus example 7.a: 1957 Oct 4.81 = JD 2436116.31
        let jd = julian_date(1957, 10, 4, 19, 26, 24.0);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn midnight_2022_july() {
        let jd = julian_date(2022, 7, 1, 0, 0, 0.0);
        assert_eq!(jd, 2_459_761.5);
    }

    #[test]
    fn clock_fraction() {
        let base = julian_date(2022, 7, 1, 0, 0, 0.0);
        let later = julian_date(2022, 7, 1, 6, 0, 0.0);
        assert!((later - base - 0.25).abs() < 1e-9);
    }

    #[test]
    fn centuries_zero_at_j2000() {
        assert_eq!(julian_centuries(J2000_JD), 0.0);
    }

    #[test]
    fn centuries_one() {
        let t = julian_centuries(J2000_JD + DAYS_PER_CENTURY);
        assert!((t - 1.0).abs() < 1e-15);
    }
}
