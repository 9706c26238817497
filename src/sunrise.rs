use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::angles::{cos_deg, rad_to_deg, sin_deg, MINUTES_PER_DEGREE};
use crate::ephemeris::solar_ephemeris;
use crate::julian::{julian_century, julian_day_for};
use crate::types::{GeoCoordinate, PolarCondition, SolarEvent, SunriseParams};

const SOLAR_NOON_UTC_MINUTES: f64 = 720.0;
const MICROS_PER_MINUTE: i64 = 60_000_000;

/// Solar noon in minutes after 0h UTC.
pub fn solar_noon_utc_minutes(longitude: f64, equation_of_time: f64) -> f64 {
    SOLAR_NOON_UTC_MINUTES - MINUTES_PER_DEGREE * longitude - equation_of_time
}

/// Cosine of the sunrise hour angle; outside [-1, 1] when the sun never
/// crosses `threshold` on that day.
pub fn cos_hour_angle(latitude: f64, declination: f64, threshold: f64) -> f64 {
    (sin_deg(threshold) - sin_deg(latitude) * sin_deg(declination))
        / (cos_deg(latitude) * cos_deg(declination))
}

/// Wall-clock time `minutes` after 0h UTC of `date`, shifted by the offset and
/// rounded half-up to the minute.
pub fn local_time(date: NaiveDate, utc_minutes: f64, offset_hours: i32) -> NaiveDateTime {
    let micros = (utc_minutes * MICROS_PER_MINUTE as f64).round() as i64;
    round_to_minute(date.and_time(NaiveTime::MIN), micros) + Duration::hours(offset_hours as i64)
}

/// Adds `micros` to a minute-aligned `base`, then adds 30 s and truncates the seconds.
pub fn round_to_minute(base: NaiveDateTime, micros: i64) -> NaiveDateTime {
    let minutes = (micros + MICROS_PER_MINUTE / 2).div_euclid(MICROS_PER_MINUTE);
    base + Duration::minutes(minutes)
}

pub fn sunrise_sunset(date: NaiveDate, coord: &GeoCoordinate, params: &SunriseParams) -> SolarEvent {
    let t = julian_century(julian_day_for(date));
    let eph = solar_ephemeris(t);
    let declination = eph.declination();

    let noon = solar_noon_utc_minutes(coord.longitude(), eph.equation_of_time);
    let cos_h0 = cos_hour_angle(coord.latitude(), declination, params.elevation_threshold());

    if cos_h0 > 1.0 {
        tracing::debug!(%date, latitude = coord.latitude(), "sun stays below the horizon");
        return SolarEvent::polar(PolarCondition::Night);
    }
    if cos_h0 < -1.0 {
        tracing::debug!(%date, latitude = coord.latitude(), "sun stays above the horizon");
        return SolarEvent::polar(PolarCondition::Day);
    }

    let h0 = rad_to_deg(cos_h0.clamp(-1.0, 1.0).acos());
    let offset = params.timezone_offset_hours();
    let sunrise = local_time(date, noon - MINUTES_PER_DEGREE * h0, offset);
    let sunset = local_time(date, noon + MINUTES_PER_DEGREE * h0, offset);
    SolarEvent::new(sunrise, sunset)
}
