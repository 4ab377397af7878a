//! End-to-end tests for station dataset assembly

use polars::prelude::{DataType, TimeUnit};

use crate::app::services::dataset::frame::to_dataframe;
use crate::app::services::dataset::metadata::{metadata_for, VARIABLE_METADATA};
use crate::app::services::dataset::{process_lines, ArchiveFormat, ProcessingOptions};
use crate::app::services::igra_parser::tests as igra_fixtures;
use crate::app::services::uadb_parser::tests as uadb_fixtures;
use crate::constants::{CELSIUS_TO_KELVIN, PROVENANCE_COLUMN};

fn igra_lines() -> Vec<String> {
    vec![
        igra_fixtures::header_line("USM00072201", 2019, 1, 1, "12", "1200", 3, 289400, -81700),
        igra_fixtures::sparse_data_line(100000, 148),
        igra_fixtures::sparse_data_line(85000, 81),
        igra_fixtures::sparse_data_line(70000, 10),
    ]
}

fn options() -> ProcessingOptions {
    ProcessingOptions {
        levels: vec![70_000.0, 85_000.0, 92_500.0, 100_000.0],
        ..Default::default()
    }
}

#[test]
fn test_igra_round_trip_with_interpolated_level() {
    let dataset =
        process_lines("USM00072201", &igra_lines(), ArchiveFormat::Igra2, &options()).unwrap();

    // One profile on a 4-level grid.
    assert_eq!(dataset.data.n_rows(), 4);
    assert!(dataset.summary.is_none());

    let temp = dataset.data.column("temp").unwrap();
    assert_eq!(temp[0], 1.0 + CELSIUS_TO_KELVIN);
    assert_eq!(temp[1], 8.1 + CELSIUS_TO_KELVIN);
    assert_eq!(temp[3], 14.8 + CELSIUS_TO_KELVIN);

    // The 92500 Pa level is the log-pressure blend of the 100000 and 85000
    // readings, converted to Kelvin.
    let expected = 8.1
        + (14.8 - 8.1) * ((92_500.0_f64.ln() - 85_000.0_f64.ln())
            / (100_000.0_f64.ln() - 85_000.0_f64.ln()))
        + CELSIUS_TO_KELVIN;
    assert!((temp[2] - expected).abs() < 1e-9);

    let flags = dataset.data.column(PROVENANCE_COLUMN).unwrap();
    assert_eq!(flags, &[0.0, 0.0, 1.0, 0.0][..]);

    // Sidecar: one row for the single profile date, from the header.
    assert_eq!(dataset.station.len(), 1);
    assert_eq!(dataset.station[0].lat, Some(28.94));
    assert_eq!(dataset.station[0].lon, Some(-8.17));
}

#[test]
fn test_uadb_pipeline_reports_summary() {
    let mut lines = vec![uadb_fixtures::header_line(1, "72211", 1965, 7, "15", "1200", 3)];
    lines.push(uadb_fixtures::data_line(1, 1000.0, 110.0, 24.8, 85.0, 270.0, 5.2));
    lines.push(uadb_fixtures::data_line(1, 850.0, 1450.0, 17.1, 75.0, 250.0, 7.1));
    lines.push(uadb_fixtures::data_line(1, 700.0, 3010.0, 8.4, 60.0, 240.0, 9.0));
    lines.push(uadb_fixtures::header_line(1, "72211", 1965, 7, "99", "1200", 1));
    lines.push(uadb_fixtures::data_line(1, 500.0, 5570.0, -12.0, 40.0, 230.0, 12.0));

    let dataset = process_lines("72211", &lines, ArchiveFormat::Uadb, &options()).unwrap();

    let summary = dataset.summary.unwrap();
    assert_eq!(summary.blocks_skipped, 1);
    assert_eq!(summary.headers_parsed, 1);
    // Pressures arrive in Pa after the parser's hPa scaling.
    assert_eq!(dataset.data.column("pres").unwrap()[3], 100_000.0);
    assert_eq!(dataset.station[0].elevation, Some(6.0));
    // UADB tables carry no dewpoint depression column.
    assert!(dataset.data.column("dpd").is_none());
}

#[test]
fn test_relative_humidity_becomes_fraction() {
    let lines = vec![
        igra_fixtures::header_line("USM00072201", 2019, 1, 1, "12", "1200", 3, 289400, -81700),
        igra_fixtures::data_line(2, 0, -9999, 100000, -9999, 148, 850, -9999, -9999, -9999),
        igra_fixtures::data_line(2, 0, -9999, 85000, -9999, 81, 700, -9999, -9999, -9999),
        igra_fixtures::data_line(2, 0, -9999, 70000, -9999, 10, 550, -9999, -9999, -9999),
    ];
    let dataset =
        process_lines("USM00072201", &lines, ArchiveFormat::Igra2, &options()).unwrap();

    let rhumi = dataset.data.column("rhumi").unwrap();
    assert_eq!(rhumi[0], 0.55);
    assert_eq!(rhumi[3], 0.85);
}

#[test]
fn test_to_dataframe_shape_and_dtypes() {
    let dataset =
        process_lines("USM00072201", &igra_lines(), ArchiveFormat::Igra2, &options()).unwrap();
    let df = to_dataframe(&dataset).unwrap();

    assert_eq!(df.height(), 4);
    // date + 7 IGRA variables + flag + lat/lon/alt.
    assert_eq!(df.width(), 12);
    assert_eq!(
        df.column("date").unwrap().dtype(),
        &DataType::Datetime(TimeUnit::Milliseconds, None)
    );
    assert!(df.column("pres").is_ok());
    assert!(df.column(PROVENANCE_COLUMN).is_ok());
    assert!(df.column("lat").is_ok());
}

#[test]
fn test_dataset_annotations_cover_output_columns() {
    let dataset =
        process_lines("USM00072201", &igra_lines(), ArchiveFormat::Igra2, &options()).unwrap();

    let annotations = dataset.annotations();
    let units = |name: &str| {
        annotations
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, meta)| meta.units)
    };
    assert_eq!(units("temp"), Some("K"));
    assert_eq!(units("pres"), Some("Pa"));
    assert_eq!(units("lat"), Some("degrees_north"));
    // The provenance flag carries no physical annotation.
    assert_eq!(units(PROVENANCE_COLUMN), None);
    // 7 profile variables plus the three sidecar position columns.
    assert_eq!(annotations.len(), 10);
}

#[test]
fn test_variable_metadata_lookup() {
    assert_eq!(metadata_for("temp").unwrap().units, "K");
    assert_eq!(metadata_for("rhumi").unwrap().units, "1");
    assert_eq!(metadata_for("windd").unwrap().standard_name, "wind_to_direction");
    assert!(metadata_for("flag_int").is_none());
    assert_eq!(VARIABLE_METADATA.len(), 10);
}
