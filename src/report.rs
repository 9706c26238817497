//! Builds per-location sunrise/sunset tables over a date range.

use tracing::debug;

use crate::dates::DateRange;
use crate::error::Result;
use crate::locations::LocationRegistry;
use crate::sunrise::sunrise_sunset;
use crate::types::{DailyRecord, GeoCoordinate, SunriseParams};

/// Everything one run needs; replaces process-wide settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub range: DateRange,
    pub locations: Vec<String>,
    pub params: SunriseParams,
}

impl ReportRequest {
    pub fn new(range: DateRange, locations: Vec<String>) -> Self {
        Self {
            range,
            locations,
            params: SunriseParams::default(),
        }
    }

    pub fn with_params(mut self, params: SunriseParams) -> Self {
        self.params = params;
        self
    }
}

/// One location's records, ascending by date.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationReport {
    /// Name as requested (trimmed), which is also what each record carries.
    pub location: String,
    pub coordinate: GeoCoordinate,
    pub records: Vec<DailyRecord>,
}

pub fn location_records(
    range: &DateRange,
    location: &str,
    coordinate: &GeoCoordinate,
    params: &SunriseParams,
) -> Vec<DailyRecord> {
    range
        .iter()
        .map(|date| DailyRecord {
            date,
            location: location.to_string(),
            event: sunrise_sunset(date, coordinate, params),
        })
        .collect()
}

/// Resolves every requested name up front, then computes each location in turn.
pub fn assemble_reports(
    request: &ReportRequest,
    registry: &LocationRegistry,
) -> Result<Vec<LocationReport>> {
    let resolved = request
        .locations
        .iter()
        .map(|name| registry.resolve(name).map(|c| (name.trim().to_string(), c)))
        .collect::<Result<Vec<_>>>()?;

    let reports = resolved
        .into_iter()
        .map(|(location, coordinate)| {
            debug!(
                %location,
                latitude = coordinate.latitude(),
                longitude = coordinate.longitude(),
                days = request.range.len(),
                "assembling location"
            );
            let records = location_records(&request.range, &location, &coordinate, &request.params);
            LocationReport {
                location,
                coordinate,
                records,
            }
        })
        .collect();
    Ok(reports)
}

/// Flat record sequence, grouped by location and ascending by date within each.
pub fn assemble(request: &ReportRequest, registry: &LocationRegistry) -> Result<Vec<DailyRecord>> {
    Ok(assemble_reports(request, registry)?
        .into_iter()
        .flat_map(|report| report.records)
        .collect())
}
