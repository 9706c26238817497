//! CSV file and console table renderings of a [`LocationReport`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::dates::DateRange;
use crate::error::Result;
use crate::report::LocationReport;
use crate::types::{DailyRecord, SunriseParams};

/// Date, sunrise, sunset, location.
pub const CSV_HEADER: [&str; 4] = ["시간", "출", "몰", "항"];
pub const TABLE_COLUMNS: &str = "날짜       출(HH:MM)  몰(HH:MM)";
pub const MISSING_TIME: &str = "--:--";

/// Keeps Unicode letters and digits, replaces everything else with `_`.
pub fn sanitize_location_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

pub fn csv_file_name(range: &DateRange, location: &str) -> String {
    format!(
        "{}_{}_{}.csv",
        range.start().format("%Y%m%d"),
        range.end().format("%Y%m%d"),
        sanitize_location_name(location)
    )
}

pub fn write_csv<W: io::Write>(writer: W, records: &[DailyRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.write_record([
            record.date_label(),
            record.sunrise_label(),
            record.sunset_label(),
            record.location.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `report` into `dir` (created if missing) and returns the file path.
pub fn write_location_csv(dir: &Path, range: &DateRange, report: &LocationReport) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(csv_file_name(range, &report.location));
    let file = fs::File::create(&path)?;
    write_csv(io::BufWriter::new(file), &report.records)?;
    info!(path = %path.display(), rows = report.records.len(), "saved");
    Ok(path)
}

pub fn write_all_csv(dir: &Path, range: &DateRange, reports: &[LocationReport]) -> Result<Vec<PathBuf>> {
    reports
        .iter()
        .map(|report| write_location_csv(dir, range, report))
        .collect()
}

pub fn render_table(report: &LocationReport, params: &SunriseParams) -> String {
    let header = format!("[{}] ({})", report.location, params.offset_label());
    let underline = "-".repeat(header.chars().count());
    let mut lines = vec![header, underline, TABLE_COLUMNS.to_string()];
    lines.extend(report.records.iter().map(|record| {
        format!(
            "{}  {:>7}  {:>7}",
            record.date_label(),
            or_missing(record.sunrise_label()),
            or_missing(record.sunset_label())
        )
    }));
    // Trailing blank line separates consecutive tables.
    lines.extend([String::new(), String::new()]);
    lines.join("\n")
}

fn or_missing(label: String) -> String {
    if label.is_empty() {
        MISSING_TIME.to_string()
    } else {
        label
    }
}
