use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dates::DateRange;
use crate::error::Result;
use crate::locations::LocationRegistry;
use crate::report::ReportRequest;
use crate::types::{GeoCoordinate, SunriseParams, DEFAULT_ELEVATION_THRESHOLD, DEFAULT_TIMEZONE_OFFSET_HOURS};

/// A single name or a list of names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LocationList {
    One(String),
    Many(Vec<String>),
}

impl LocationList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(name) => vec![name],
            Self::Many(names) => names,
        }
    }
}

impl Default for LocationList {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtraLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Run settings, typically read from a TOML file.
///
/// ```toml
/// start = "20240101"
/// end = "2024-01-31"
/// locations = ["Busan", "Incheon"]
/// output_dir = "out"
///
/// [[extra_locations]]
/// name = "Jeju"
/// latitude = 33.5
/// longitude = 126.5
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub start: Option<String>,
    pub end: Option<String>,
    pub locations: LocationList,
    pub output_dir: PathBuf,
    pub timezone_offset_hours: i32,
    pub elevation_threshold: f64,
    pub extra_locations: Vec<ExtraLocation>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            locations: LocationList::default(),
            output_dir: PathBuf::from("output"),
            timezone_offset_hours: DEFAULT_TIMEZONE_OFFSET_HOURS,
            elevation_threshold: DEFAULT_ELEVATION_THRESHOLD,
            extra_locations: Vec::new(),
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Default registry plus `extra_locations`.
    pub fn registry(&self) -> Result<LocationRegistry> {
        let mut registry = LocationRegistry::default();
        for extra in &self.extra_locations {
            let coordinate = GeoCoordinate::new(extra.latitude, extra.longitude)?;
            registry.insert(extra.name.trim(), coordinate);
        }
        Ok(registry)
    }

    pub fn params(&self) -> Result<SunriseParams> {
        SunriseParams::new(self.timezone_offset_hours, self.elevation_threshold)
    }

    /// Validated request; a missing start or end reads as an empty date string.
    pub fn request(&self) -> Result<ReportRequest> {
        let range = DateRange::parse(
            self.start.as_deref().unwrap_or_default(),
            self.end.as_deref().unwrap_or_default(),
        )?;
        let locations = self.locations.clone().into_vec();
        Ok(ReportRequest::new(range, locations).with_params(self.params()?))
    }
}
