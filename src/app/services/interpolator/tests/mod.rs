//! Test fixtures for the regridding engine

use chrono::{NaiveDate, NaiveDateTime};

use crate::app::services::interpolator::table::{ProfileColumn, ProfileTable};


pub fn date(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 1, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// A one-variable table from (date, pressure, temperature) rows.
pub fn table_from_rows(rows: &[(NaiveDateTime, f64, f64)]) -> ProfileTable {
    ProfileTable::from_columns(
        rows.iter().map(|r| r.0).collect(),
        vec![
            ProfileColumn {
                name: "pres".to_string(),
                values: rows.iter().map(|r| r.1).collect(),
            },
            ProfileColumn {
                name: "temp".to_string(),
                values: rows.iter().map(|r| r.2).collect(),
            },
        ],
    )
    .unwrap()
}

/// The closed-form two-point log-pressure interpolation.
pub fn log_linear(p: f64, p1: f64, v1: f64, p2: f64, v2: f64) -> f64 {
    v1 + (v2 - v1) * ((p.ln() - p1.ln()) / (p2.ln() - p1.ln()))
}
