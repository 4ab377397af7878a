//! Tests for station-history metadata parsing

use chrono::{NaiveDate, Timelike};

use crate::app::services::station_history::parse_station_history;

/// Place `text` right-aligned into `buf` at the 0-based half-open range.
fn put(buf: &mut Vec<u8>, start: usize, end: usize, text: &str) {
    let field = format!("{text:>width$}", width = end - start);
    buf[start..end].copy_from_slice(&field.as_bytes()[..end - start]);
}

#[allow(clippy::too_many_arguments)]
fn history_line(
    igra_id: &str,
    wmo_id: i64,
    name: &str,
    lat: f64,
    lon: f64,
    ele: f64,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    event: &str,
) -> String {
    let mut buf = vec![b' '; 354];
    put(&mut buf, 0, 11, igra_id);
    put(&mut buf, 12, 17, &wmo_id.to_string());
    put(&mut buf, 18, 48, name);
    put(&mut buf, 51, 60, &format!("{lat:.4}"));
    put(&mut buf, 63, 72, &format!("{lon:.4}"));
    put(&mut buf, 75, 81, &format!("{ele:.1}"));
    put(&mut buf, 84, 88, &year.to_string());
    put(&mut buf, 89, 91, &month.to_string());
    put(&mut buf, 92, 94, &day.to_string());
    put(&mut buf, 95, 97, &hour.to_string());
    put(&mut buf, 98, 99, "3");
    put(&mut buf, 100, 119, event);
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_parse_event_record() {
    let line = history_line(
        "USM00072201",
        72201,
        "KEY WEST",
        24.5500,
        -81.7500,
        6.0,
        1987,
        4,
        1,
        12,
        "RADIOSONDE CHANGE",
    );
    let events = parse_station_history(&[line]).unwrap();

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.igra_id, "USM00072201");
    assert_eq!(event.wmo_id, Some(72201));
    assert_eq!(event.name, "KEY WEST");
    assert_eq!(event.latitude, Some(24.55));
    assert_eq!(event.longitude, Some(-81.75));
    assert_eq!(event.elevation, Some(6.0));
    assert_eq!(event.event, "RADIOSONDE CHANGE");
    assert_eq!(
        event.date,
        NaiveDate::from_ymd_opt(1987, 4, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    );
}

#[test]
fn test_flag_and_narrative_columns_decoded() {
    let mut line = history_line(
        "USM00072201",
        72201,
        "KEY WEST",
        24.55,
        -81.75,
        6.0,
        1987,
        4,
        1,
        12,
        "RADIOSONDE CHANGE",
    );
    line.replace_range(49..50, "c");
    line.replace_range(61..62, "m");
    line.replace_range(120..122, " N");
    line.replace_range(123..135, "VIZ 1392-510");
    line.replace_range(163..164, "p");
    line.replace_range(165..167, " 7");
    line.replace_range(168..179, "VIZ B2 1492");
    line.replace_range(208..209, "p");
    line.replace_range(210..222, "GAFFNEY 1993");
    line.replace_range(235..250, "SEE ALSO UPDATE");
    line.replace_range(315..326, "REVALIDATED");
    line.replace_range(347..354, "2014-08");

    let events = parse_station_history(&[line]).unwrap();
    let event = &events[0];
    assert_eq!(event.name_flag, "c");
    assert_eq!(event.latitude_flag, "m");
    assert_eq!(event.longitude_flag, "");
    assert_eq!(event.date_indicator, 3);
    assert_eq!(event.altitude_indicator, "N");
    assert_eq!(event.before_info, "VIZ 1392-510");
    assert_eq!(event.before_flag, "p");
    assert_eq!(event.link, "7");
    assert_eq!(event.after_info, "VIZ B2 1492");
    assert_eq!(event.after_flag, "p");
    assert_eq!(event.reference, "GAFFNEY 1993");
    assert_eq!(event.comment, "SEE ALSO UPDATE");
    assert_eq!(event.update_comment, "REVALIDATED");
    assert_eq!(event.update_date, "2014-08");
}

#[test]
fn test_missing_date_parts_repaired_to_midrange() {
    let line = history_line(
        "USM00072201",
        72201,
        "KEY WEST",
        24.55,
        -81.75,
        6.0,
        1965,
        99,
        99,
        99,
        "ESTABLISHED",
    );
    let events = parse_station_history(&[line]).unwrap();

    let date = events[0].date;
    assert_eq!(date.date(), NaiveDate::from_ymd_opt(1965, 6, 15).unwrap());
    assert_eq!(date.hour(), 0);
}

#[test]
fn test_missing_position_codes() {
    let line = history_line(
        "ZZV00000001",
        99999,
        "MOBILE SHIP",
        -98.8888,
        -998.8888,
        -998.8,
        1950,
        1,
        1,
        0,
        "ESTABLISHED",
    );
    let events = parse_station_history(&[line]).unwrap();

    assert_eq!(events[0].wmo_id, None);
    assert_eq!(events[0].latitude, None);
    assert_eq!(events[0].longitude, None);
    assert_eq!(events[0].elevation, None);
}

#[test]
fn test_malformed_record_propagates_decode_error() {
    let mut line = history_line(
        "USM00072201",
        72201,
        "KEY WEST",
        24.55,
        -81.75,
        6.0,
        1987,
        4,
        1,
        12,
        "RADIOSONDE CHANGE",
    );
    line.replace_range(84..88, "19x7");
    assert!(parse_station_history(&[line]).is_err());
}

#[test]
fn test_empty_lines_are_ignored() {
    let events = parse_station_history(&[String::new()]).unwrap();
    assert!(events.is_empty());
}
