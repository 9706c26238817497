use chrono::NaiveDate;

use sun_times::dates::DateRange;
use sun_times::error::Error;
use sun_times::locations::LocationRegistry;
use sun_times::report::*;
use sun_times::types::{GeoCoordinate, SunriseParams};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn request(start: NaiveDate, end: NaiveDate, names: &[&str]) -> ReportRequest {
    let range = DateRange::new(start, end).unwrap();
    ReportRequest::new(range, names.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_records_grouped_by_location_then_date() {
    let req = request(date(2024, 1, 1), date(2024, 1, 3), &["Busan", "Incheon"]);
    let records = assemble(&req, &LocationRegistry::default()).unwrap();
    let keys: Vec<(String, NaiveDate)> = records.iter().map(|r| (r.location.clone(), r.date)).collect();
    assert_eq!(
        keys,
        [
            ("Busan".to_string(), date(2024, 1, 1)),
            ("Busan".to_string(), date(2024, 1, 2)),
            ("Busan".to_string(), date(2024, 1, 3)),
            ("Incheon".to_string(), date(2024, 1, 1)),
            ("Incheon".to_string(), date(2024, 1, 2)),
            ("Incheon".to_string(), date(2024, 1, 3)),
        ]
    );
}

#[test]
fn test_record_labels() {
    let req = request(date(2024, 1, 1), date(2024, 1, 1), &["busan"]);
    let records = assemble(&req, &LocationRegistry::default()).unwrap();
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.location, "busan");
    assert_eq!(r.date_label(), "20240101");
    assert_eq!(r.sunrise_label(), "07:32");
    assert_eq!(r.sunset_label(), "17:22");
}

#[test]
fn test_reports_carry_resolved_coordinate() {
    let req = request(date(2024, 1, 1), date(2024, 1, 31), &[" Mokpo "]);
    let reports = assemble_reports(&req, &LocationRegistry::default()).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].location, "Mokpo");
    assert_eq!(reports[0].coordinate.latitude(), 34.7320);
    assert_eq!(reports[0].records.len(), 31);
}

#[test]
fn test_unknown_location_yields_no_output() {
    let req = request(date(2024, 1, 1), date(2024, 1, 3), &["Busan", "Nowhere"]);
    match assemble(&req, &LocationRegistry::default()) {
        Err(Error::LocationNotFound(name)) => assert_eq!(name, "Nowhere"),
        other => panic!("expected LocationNotFound, got {:?}", other),
    }
}

#[test]
fn test_empty_location_list() {
    let req = request(date(2024, 1, 1), date(2024, 1, 3), &[]);
    assert!(assemble(&req, &LocationRegistry::default()).unwrap().is_empty());
}

#[test]
fn test_custom_params_flow_through() {
    let req = request(date(2024, 6, 21), date(2024, 6, 21), &["Busan"])
        .with_params(SunriseParams::new(0, -0.833).unwrap());
    let records = assemble(&req, &LocationRegistry::default()).unwrap();
    assert_eq!(records[0].sunrise_label(), "20:10");
    assert_eq!(records[0].sunset_label(), "10:41");
}

#[test]
fn test_polar_records_have_empty_labels() {
    let mut registry = LocationRegistry::new();
    registry.insert("Svalbard", GeoCoordinate::new(80.0, 20.0).unwrap());
    let req = request(date(2024, 12, 20), date(2024, 12, 22), &["Svalbard"]);
    let records = assemble(&req, &registry).unwrap();
    assert_eq!(records.len(), 3);
    for r in &records {
        assert!(r.event.is_polar());
        assert_eq!(r.sunrise_label(), "");
        assert_eq!(r.sunset_label(), "");
    }
}

#[test]
fn test_location_records_direct() {
    let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 5)).unwrap();
    let coord = GeoCoordinate::new(0.0, 0.0).unwrap();
    let records = location_records(&range, "Null Island", &coord, &SunriseParams::default());
    assert_eq!(records.len(), 5);
    assert!(records.windows(2).all(|w| w[0].date < w[1].date));
    assert!(records.iter().all(|r| r.location == "Null Island"));
}
