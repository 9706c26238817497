//! Error types for sunrise/sunset reporting.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// End date precedes start date.
    #[error("invalid date range: end {end} precedes start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("no coordinates registered for location '{0}'")]
    LocationNotFound(String),

    #[error("invalid coordinate ({latitude}, {longitude}): latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Date string is not `YYYYMMDD` or `YYYY-MM-DD`, or names no real day.
    #[error("invalid date '{0}' (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid timezone offset {0}h (must be within ±14h)")]
    InvalidTimezoneOffset(i32),

    /// Threshold is NaN or outside [-90, 90] degrees.
    #[error("invalid elevation threshold {0}° (must be within [-90, 90])")]
    InvalidElevationThreshold(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}
