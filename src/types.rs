use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

pub type CalendarDate = NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Caller guarantees the range invariant (built-in tables only).
    pub(crate) const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationEntry {
    pub name: String,
    pub coordinate: GeoCoordinate,
}

/// Which way the sun failed to cross the threshold on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// Sun stays above the threshold all day.
    Day,
    /// Sun stays below the threshold all day.
    Night,
}

/// Local wall-clock sunrise and sunset, rounded to the minute.
///
/// Both times are present or both are absent; construct through
/// [`SolarEvent::new`] or [`SolarEvent::polar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarEvent {
    sunrise: Option<NaiveDateTime>,
    sunset: Option<NaiveDateTime>,
    polar: Option<PolarCondition>,
}

impl SolarEvent {
    pub fn new(sunrise: NaiveDateTime, sunset: NaiveDateTime) -> Self {
        Self {
            sunrise: Some(sunrise),
            sunset: Some(sunset),
            polar: None,
        }
    }

    pub fn polar(condition: PolarCondition) -> Self {
        Self {
            sunrise: None,
            sunset: None,
            polar: Some(condition),
        }
    }

    pub fn sunrise(&self) -> Option<NaiveDateTime> {
        self.sunrise
    }

    pub fn sunset(&self) -> Option<NaiveDateTime> {
        self.sunset
    }

    pub fn polar_condition(&self) -> Option<PolarCondition> {
        self.polar
    }

    pub fn is_polar(&self) -> bool {
        self.polar.is_some()
    }

    pub fn day_length_minutes(&self) -> Option<i64> {
        Some((self.sunset? - self.sunrise?).num_minutes())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: CalendarDate,
    pub location: String,
    pub event: SolarEvent,
}

impl DailyRecord {
    pub fn date_label(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    pub fn sunrise_label(&self) -> String {
        time_label(self.event.sunrise())
    }

    pub fn sunset_label(&self) -> String {
        time_label(self.event.sunset())
    }
}

fn time_label(time: Option<NaiveDateTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

pub const DEFAULT_TIMEZONE_OFFSET_HOURS: i32 = 9;
/// Refraction plus solar semi-diameter.
pub const DEFAULT_ELEVATION_THRESHOLD: f64 = -0.833;
pub const MAX_TIMEZONE_OFFSET_HOURS: i32 = 14;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunriseParams {
    timezone_offset_hours: i32,
    elevation_threshold: f64,
}

impl SunriseParams {
    pub fn new(timezone_offset_hours: i32, elevation_threshold: f64) -> Result<Self> {
        if timezone_offset_hours.abs() > MAX_TIMEZONE_OFFSET_HOURS {
            return Err(Error::InvalidTimezoneOffset(timezone_offset_hours));
        }
        if !(-90.0..=90.0).contains(&elevation_threshold) {
            return Err(Error::InvalidElevationThreshold(elevation_threshold));
        }
        Ok(Self {
            timezone_offset_hours,
            elevation_threshold,
        })
    }

    pub fn timezone_offset_hours(&self) -> i32 {
        self.timezone_offset_hours
    }

    pub fn elevation_threshold(&self) -> f64 {
        self.elevation_threshold
    }

    /// `UTC+HH:MM` label for the configured offset.
    pub fn offset_label(&self) -> String {
        let sign = if self.timezone_offset_hours < 0 { '-' } else { '+' };
        format!("UTC{}{:02}:00", sign, self.timezone_offset_hours.abs())
    }
}

impl Default for SunriseParams {
    fn default() -> Self {
        Self {
            timezone_offset_hours: DEFAULT_TIMEZONE_OFFSET_HOURS,
            elevation_threshold: DEFAULT_ELEVATION_THRESHOLD,
        }
    }
}
