//! Conversion of an assembled station dataset to a polars DataFrame
//!
//! One long-format frame: a millisecond-precision `date` column, the
//! regridded value columns, the provenance flag, and the sidecar position
//! broadcast onto every row of its date. Sidecar values use nulls for
//! missing (position is genuinely absent), while profile values keep NaN
//! (missing-but-shaped, as the interpolator produced them).

use std::collections::HashMap;

use chrono::NaiveDateTime;
use polars::prelude::{Column, DataFrame, DataType, SortMultipleOptions, TimeUnit};
use tracing::debug;

use super::metadata::metadata_for;
use super::StationDataset;
use crate::constants::{PRESSURE_COLUMN, PROVENANCE_COLUMN};
use crate::Result;

/// Build the output DataFrame, sorted by (date, pressure).
pub fn to_dataframe(dataset: &StationDataset) -> Result<DataFrame> {
    let data = &dataset.data;

    let stamps: Vec<i64> = data
        .dates()
        .iter()
        .map(|d| d.and_utc().timestamp_millis())
        .collect();

    let mut columns: Vec<Column> = vec![Column::new("date".into(), stamps)];
    for column in data.columns() {
        if column.name != PROVENANCE_COLUMN && metadata_for(&column.name).is_none() {
            debug!(column = %column.name, "no metadata annotation for output column");
        }
        columns.push(Column::new(
            column.name.as_str().into(),
            column.values.clone(),
        ));
    }

    let sidecar: HashMap<NaiveDateTime, usize> = dataset
        .station
        .iter()
        .enumerate()
        .map(|(i, row)| (row.date, i))
        .collect();
    let mut lat: Vec<Option<f64>> = Vec::with_capacity(data.n_rows());
    let mut lon: Vec<Option<f64>> = Vec::with_capacity(data.n_rows());
    let mut alt: Vec<Option<f64>> = Vec::with_capacity(data.n_rows());
    for date in data.dates() {
        let row = sidecar.get(date).map(|&i| &dataset.station[i]);
        lat.push(row.and_then(|r| r.lat));
        lon.push(row.and_then(|r| r.lon));
        alt.push(row.and_then(|r| r.elevation));
    }
    columns.push(Column::new("lat".into(), lat));
    columns.push(Column::new("lon".into(), lon));
    columns.push(Column::new("alt".into(), alt));

    let mut df = DataFrame::new(columns)?;
    let date = df
        .column("date")?
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
    df.with_column(date)?;

    let df = df.sort(["date", PRESSURE_COLUMN], SortMultipleOptions::default())?;
    Ok(df)
}
