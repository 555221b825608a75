//! Integration test: writing phase reports.

use selene_calendar::CalendarDate;
use selene_io::{IoError, PhaseReport, write_report};
use selene_lunar::{DailyObservation, aggregate, days_per_phase};

fn report() -> PhaseReport {
    let observations = [
        DailyObservation::new(CalendarDate::new(2023, 1, 21).unwrap(), 4),
        DailyObservation::new(CalendarDate::new(2023, 2, 5).unwrap(), 6),
    ];
    let totals = aggregate(&observations).unwrap();
    PhaseReport::new(3, "Aves", 2023, &totals, &days_per_phase(2023))
}

#[test]
fn write_and_read_back() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("report.json");

    write_report(&path, &report()).expect("write succeeds");

    let text = std::fs::read_to_string(&path).expect("read back");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(value["taxon_id"], 3);
    assert_eq!(value["year"], 2023);
    assert_eq!(value["total_observations"], 10);

    let phases = value["phases"].as_array().expect("phases array");
    assert_eq!(phases.len(), 8);
    assert_eq!(phases[0]["phase"], "New Moon");
    assert_eq!(phases[7]["phase"], "Waning Crescent");
    let days: u64 = phases.iter().map(|p| p["days"].as_u64().unwrap()).sum();
    assert_eq!(days, 365);
}

#[test]
fn write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing").join("report.json");
    let err = write_report(&path, &report()).unwrap_err();
    assert!(
        matches!(err, IoError::Write { .. }),
        "expected Write, got {err:?}",
    );
}
