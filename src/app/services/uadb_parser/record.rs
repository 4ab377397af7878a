//! UADB data record decoding
//!
//! Data layout, 0-based half-open columns: level type code, pressure (hPa,
//! real), geopotential height (m), temperature (degrees C), relative
//! humidity (%), wind direction (degrees), wind speed (m/s).
//!
//! Pressure is converted to Pa here so both archive formats present the
//! interpolator with the same units. Sentinels are checked on the raw
//! decoded values, before that scaling, so a missing pressure can never
//! survive as -999900 Pa.

use chrono::NaiveDateTime;

use crate::app::models::LevelRecord;
use crate::app::services::fixed_width::{decode_fixed_width, FieldMap, FieldSpec, FieldType};
use crate::constants::uadb_sentinels;
use crate::Result;

/// Data record layout, 0-based half-open columns.
pub const DATA_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("ltyp", 0, 4, FieldType::Integer),
    FieldSpec::new("press", 5, 13, FieldType::Real),
    FieldSpec::new("gph", 14, 22, FieldType::Real),
    FieldSpec::new("temp", 23, 29, FieldType::Real),
    FieldSpec::new("rh", 30, 36, FieldType::Real),
    FieldSpec::new("wdir", 37, 43, FieldType::Real),
    FieldSpec::new("wspd", 44, 50, FieldType::Real),
];

/// Decode one data line into a [`LevelRecord`] under the given header date.
pub fn decode_data_record(line: &str, date: NaiveDateTime, line_no: usize) -> Result<LevelRecord> {
    let fields = decode_fixed_width(line, DATA_SCHEMA, line_no)?;

    Ok(LevelRecord {
        date,
        // The UADB level-type code does not map onto the IGRA major/minor pair.
        level_type_major: None,
        level_type_minor: None,
        elapsed_seconds: None,
        pressure: normalized(&fields, "press")?.map(|hpa| hpa * 100.0),
        pressure_flag: None,
        height: normalized(&fields, "gph")?,
        height_flag: None,
        temperature: normalized(&fields, "temp")?,
        temperature_flag: None,
        relative_humidity: normalized(&fields, "rh")?,
        dewpoint_depression: None,
        wind_direction: normalized(&fields, "wdir")?,
        wind_speed: normalized(&fields, "wspd")?,
    })
}

/// A real field with UADB sentinel normalization, pre-scaling.
fn normalized(fields: &FieldMap, name: &'static str) -> Result<Option<f64>> {
    let raw = fields.real(name)?;
    Ok(if uadb_sentinels::ALL.contains(&raw) {
        None
    } else {
        Some(raw)
    })
}
