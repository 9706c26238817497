//! Calendar date <-> Julian Day conversion (Meeus, "Astronomical Algorithms", ch. 7).

use chrono::{Datelike, NaiveDate};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000: f64 = 2451545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// First Julian Day of the Gregorian calendar (1582-10-15).
const GREGORIAN_REFORM_JD: f64 = 2299161.0;

/// Julian Day at 0h UT of a proleptic Gregorian date.
///
/// January and February count as months 13 and 14 of the previous year.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
}

pub fn julian_day_for(date: NaiveDate) -> f64 {
    julian_day(date.year(), date.month(), date.day())
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_JULIAN_CENTURY
}

/// Inverse of [`julian_day`]: the calendar date containing `jd`.
///
/// The fractional day is dropped; dates before the Gregorian reform fall
/// back to the Julian calendar as in Meeus.
pub fn calendar_date(jd: f64) -> (i32, u32, u32) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let a = if z < GREGORIAN_REFORM_JD {
        z
    } else {
        let alpha = ((z - 1867216.25) / 36524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day as u32)
}
