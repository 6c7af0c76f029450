// File: crates/chart-core/tests/dataset.rs
// Purpose: Load-time validation of observation records.

use chrono::NaiveDate;
use swell_chart_core::dataset::{barcelona_week, BARCELONA_WEEK};
use swell_chart_core::{ChartError, Observations, RawObservation};

fn raw(date: &'static str, height: f64, period: f64, direction: f64) -> RawObservation {
    RawObservation { date, temperature: 20.0, wave_height: height, wave_period: period, wave_direction: direction }
}

#[test]
fn barcelona_week_is_valid_and_ordered() {
    let obs = barcelona_week().expect("literal dataset validates");
    assert_eq!(obs.len(), 7);
    assert_eq!(obs.first().date, NaiveDate::from_ymd_opt(2023, 10, 1).unwrap());
    assert_eq!(obs.last().date, NaiveDate::from_ymd_opt(2023, 10, 7).unwrap());
    assert!(obs.as_slice().windows(2).all(|w| w[0].date < w[1].date));
    assert_eq!(obs.extent(|o| o.wave_period), (4.0, 8.0));
    assert_eq!(obs.extent(|o| o.wave_height), (1.0, 1.8));
}

#[test]
fn empty_dataset_is_rejected() {
    assert!(matches!(Observations::from_raw(&[]), Err(ChartError::EmptyDataset)));
}

#[test]
fn single_record_is_accepted() {
    let obs = Observations::from_raw(&BARCELONA_WEEK[2..3]).unwrap();
    assert_eq!(obs.len(), 1);
    assert!(!obs.is_empty());
}

#[test]
fn unparseable_date_names_the_record() {
    let records = [raw("2023-10-01", 1.0, 5.0, 10.0), raw("2023-13-02", 1.0, 5.0, 10.0)];
    let err = Observations::from_raw(&records).unwrap_err();
    match &err {
        ChartError::InvalidDate { index, text, .. } => {
            assert_eq!(*index, 1);
            assert_eq!(text, "2023-13-02");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("2023-13-02"));
}

#[test]
fn numeric_fields_are_range_checked() {
    let nan = Observations::from_raw(&[raw("2023-10-01", f64::NAN, 5.0, 10.0)]);
    assert!(matches!(nan, Err(ChartError::NonFinite { field: "wave height", .. })));

    let flat = Observations::from_raw(&[raw("2023-10-01", 0.0, 5.0, 10.0)]);
    assert!(matches!(flat, Err(ChartError::NotPositive { field: "wave height", .. })));

    let period = Observations::from_raw(&[raw("2023-10-01", 1.0, -2.0, 10.0)]);
    assert!(matches!(period, Err(ChartError::NotPositive { field: "wave period", .. })));

    let bearing = Observations::from_raw(&[raw("2023-10-01", 1.0, 5.0, 361.0)]);
    assert!(matches!(bearing, Err(ChartError::OutOfRange { field: "wave direction", .. })));

    let negative = Observations::from_raw(&[raw("2023-10-01", 1.0, 5.0, -1.0)]);
    assert!(matches!(negative, Err(ChartError::OutOfRange { field: "wave direction", .. })));

    let mut hot = raw("2023-10-01", 1.0, 5.0, 10.0);
    hot.temperature = 75.0;
    assert!(matches!(Observations::from_raw(&[hot]), Err(ChartError::OutOfRange { field: "temperature", .. })));
}

#[test]
fn bearing_bounds_are_inclusive() {
    let records = [raw("2023-10-01", 1.0, 5.0, 0.0), raw("2023-10-02", 1.0, 5.0, 360.0)];
    assert!(Observations::from_raw(&records).is_ok());
}

#[test]
fn dates_must_strictly_increase() {
    let duplicate = [raw("2023-10-01", 1.0, 5.0, 10.0), raw("2023-10-01", 1.2, 5.0, 10.0)];
    assert!(matches!(Observations::from_raw(&duplicate), Err(ChartError::Unordered { index: 1, .. })));

    let backwards = [raw("2023-10-02", 1.0, 5.0, 10.0), raw("2023-10-01", 1.2, 5.0, 10.0)];
    assert!(matches!(Observations::from_raw(&backwards), Err(ChartError::Unordered { index: 1, .. })));
}
