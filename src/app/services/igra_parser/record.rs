//! IGRA v2 data record decoding
//!
//! Data layout (1-based inclusive columns from the format description):
//!
//! ```text
//! LVLTYP1 1- 1  LVLTYP2 2- 2  ETIME 4- 8  PRESS 10-15  PFLAG 16-16
//! GPH    17-21  ZFLAG  22-22  TEMP 23-27  TFLAG 28-28  RH    29-33
//! DPDP   35-39  WDIR   41-45  WSPD 47-51
//! ```
//!
//! Temperature, relative humidity, dewpoint depression and wind speed are
//! reported in tenths; pressure is already Pa. The sentinel codes -9999
//! (missing prior to QA) and -8888 (removed by QA) are normalized to missing
//! on the raw integers, which is equivalent to checking -999.9 / -888.8 on
//! the tenths-scaled values.

use chrono::NaiveDateTime;

use crate::app::models::{LevelRecord, LevelTypeMajor, LevelTypeMinor, QaFlag};
use crate::app::services::fixed_width::{decode_fixed_width, FieldMap, FieldSpec, FieldType};
use crate::constants::igra_sentinels;
use crate::Result;

/// Data record layout, 0-based half-open columns.
pub const DATA_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("lvltyp1", 0, 1, FieldType::Integer),
    FieldSpec::new("lvltyp2", 1, 2, FieldType::Integer),
    FieldSpec::new("etime", 3, 8, FieldType::Integer),
    FieldSpec::new("press", 9, 15, FieldType::Integer),
    FieldSpec::new("pflag", 15, 16, FieldType::Character),
    FieldSpec::new("gph", 16, 21, FieldType::Integer),
    FieldSpec::new("zflag", 21, 22, FieldType::Character),
    FieldSpec::new("temp", 22, 27, FieldType::Integer),
    FieldSpec::new("tflag", 27, 28, FieldType::Character),
    FieldSpec::new("rh", 28, 33, FieldType::Integer),
    FieldSpec::new("dpdp", 34, 39, FieldType::Integer),
    FieldSpec::new("wdir", 40, 45, FieldType::Integer),
    FieldSpec::new("wspd", 46, 51, FieldType::Integer),
];

/// Raw integer sentinels shared by every numeric field of the record.
const SENTINELS: [i64; 2] = igra_sentinels::ALL;

/// Decode one data line into a [`LevelRecord`] under the given header date.
pub fn decode_data_record(line: &str, date: NaiveDateTime, line_no: usize) -> Result<LevelRecord> {
    let fields = decode_fixed_width(line, DATA_SCHEMA, line_no)?;

    Ok(LevelRecord {
        date,
        level_type_major: LevelTypeMajor::from_digit(fields.integer("lvltyp1")?),
        level_type_minor: LevelTypeMinor::from_digit(fields.integer("lvltyp2")?),
        elapsed_seconds: elapsed_seconds(fields.integer("etime")?),
        pressure: unscaled(&fields, "press")?,
        pressure_flag: qa_flag(&fields, "pflag")?,
        height: unscaled(&fields, "gph")?,
        height_flag: qa_flag(&fields, "zflag")?,
        temperature: tenths(&fields, "temp")?,
        temperature_flag: qa_flag(&fields, "tflag")?,
        relative_humidity: tenths(&fields, "rh")?,
        dewpoint_depression: tenths(&fields, "dpdp")?,
        wind_direction: unscaled(&fields, "wdir")?,
        wind_speed: tenths(&fields, "wspd")?,
    })
}

/// A raw integer field with sentinel normalization, no scaling.
fn unscaled(fields: &FieldMap, name: &'static str) -> Result<Option<f64>> {
    let raw = fields.integer(name)?;
    Ok(if SENTINELS.contains(&raw) {
        None
    } else {
        Some(raw as f64)
    })
}

/// A tenths-scaled field with sentinel normalization.
fn tenths(fields: &FieldMap, name: &'static str) -> Result<Option<f64>> {
    let raw = fields.integer(name)?;
    Ok(if SENTINELS.contains(&raw) {
        None
    } else {
        Some(raw as f64 / 10.0)
    })
}

/// Elapsed time since launch: MMMSS (not zero-padded) to seconds.
fn elapsed_seconds(raw: i64) -> Option<i64> {
    if SENTINELS.contains(&raw) {
        return None;
    }
    Some((raw / 100) * 60 + raw % 100)
}

fn qa_flag(fields: &FieldMap, name: &'static str) -> Result<Option<QaFlag>> {
    let raw = fields.character(name)?;
    Ok(raw.chars().next().and_then(QaFlag::from_char))
}
