//! Tests for station sidecar forward-filling

use chrono::{NaiveDate, NaiveDateTime};

use crate::app::models::SoundingHeader;
use crate::app::services::sidecar::build_sidecar;

fn date(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 1, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn header(day: u32, hour: u32, lat: f64, lon: f64) -> SoundingHeader {
    SoundingHeader {
        date: date(day, hour),
        ident: "USM00072201".to_string(),
        numlev: 10,
        lat: Some(lat),
        lon: Some(lon),
        p_src: None,
        np_src: None,
        usi: None,
        station_type: None,
        elevation: Some(6.0),
    }
}

#[test]
fn test_exact_match_takes_header_values() {
    let headers = vec![header(1, 0, 24.55, -81.75), header(2, 0, 24.56, -81.74)];
    let rows = build_sidecar(&headers, &[date(1, 0), date(2, 0)]);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].lat, Some(24.55));
    assert_eq!(rows[1].lat, Some(24.56));
    assert_eq!(rows[1].numlev, Some(10));
}

#[test]
fn test_forward_fill_carries_last_known_position() {
    // No header at day 3: day 2's position carries forward.
    let headers = vec![header(1, 0, 24.55, -81.75), header(2, 0, 24.56, -81.74)];
    let rows = build_sidecar(&headers, &[date(3, 12)]);

    assert_eq!(rows[0].date, date(3, 12));
    assert_eq!(rows[0].lat, Some(24.56));
    assert_eq!(rows[0].lon, Some(-81.74));
    assert_eq!(rows[0].elevation, Some(6.0));
}

#[test]
fn test_dates_before_first_header_are_missing() {
    let headers = vec![header(5, 0, 24.55, -81.75)];
    let rows = build_sidecar(&headers, &[date(1, 0), date(5, 0)]);

    assert_eq!(rows[0].lat, None);
    assert_eq!(rows[0].lon, None);
    assert_eq!(rows[0].numlev, None);
    assert_eq!(rows[1].lat, Some(24.55));
}

#[test]
fn test_duplicate_header_dates_keep_last() {
    let headers = vec![header(1, 0, 24.55, -81.75), header(1, 0, 30.00, -80.00)];
    let rows = build_sidecar(&headers, &[date(1, 0)]);

    assert_eq!(rows[0].lat, Some(30.00));
}

#[test]
fn test_unsorted_headers_are_ordered_before_filling() {
    let headers = vec![header(4, 0, 24.60, -81.70), header(1, 0, 24.55, -81.75)];
    let rows = build_sidecar(&headers, &[date(2, 0)]);

    assert_eq!(rows[0].lat, Some(24.55));
}
