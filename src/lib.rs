pub mod angles;
pub mod config;
pub mod dates;
pub mod ephemeris;
pub mod error;
pub mod julian;
pub mod locations;
pub mod output;
pub mod report;
pub mod sunrise;
pub mod types;

pub use angles::{deg_to_rad, normalize_angle, rad_to_deg, MINUTES_PER_DEGREE};

pub use config::{ExtraLocation, LocationList, RunConfig};

pub use dates::{parse_date, DateRange, DateRangeIter};

pub use ephemeris::{solar_declination, solar_ephemeris, SolarEphemeris};

pub use error::{Error, Result};

pub use julian::{calendar_date, julian_century, julian_day, julian_day_for, J2000};

pub use locations::{LocationRegistry, DEFAULT_LOCATIONS};

pub use output::{
    csv_file_name, render_table, sanitize_location_name, write_all_csv, write_csv,
    write_location_csv,
};

pub use report::{assemble, assemble_reports, location_records, LocationReport, ReportRequest};

pub use sunrise::{cos_hour_angle, local_time, round_to_minute, solar_noon_utc_minutes, sunrise_sunset};

pub use types::{
    CalendarDate, DailyRecord, GeoCoordinate, LocationEntry, PolarCondition, SolarEvent,
    SunriseParams, DEFAULT_ELEVATION_THRESHOLD, DEFAULT_TIMEZONE_OFFSET_HOURS,
};
