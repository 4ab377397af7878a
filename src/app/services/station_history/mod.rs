//! IGRA station-history metadata parsing
//!
//! The station-history file documents instrumentation and observing-practice
//! events per station. It is another fixed-width layout, so it goes through
//! the same schema-driven decoder as the sounding formats; only the schema
//! table differs. Event dates may have missing parts, repaired to mid-range
//! defaults as the archive documentation prescribes (month 99 -> June,
//! day 99 -> 15th, hour 99 -> 00).

use chrono::NaiveDate;
use tracing::debug;

use crate::app::models::StationEvent;
use crate::app::services::fixed_width::{decode_fixed_width, FieldSpec, FieldType};
use crate::{IgraError, Result};

#[cfg(test)]
pub mod tests;

/// Station-history record layout, 0-based half-open columns. All 26 columns
/// of the metadata readme.
pub const HISTORY_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("igra_id", 0, 11, FieldType::Character),
    FieldSpec::new("wmo_id", 12, 17, FieldType::Integer),
    FieldSpec::new("name", 18, 48, FieldType::Character),
    FieldSpec::new("name_flag", 49, 50, FieldType::Character),
    FieldSpec::new("latitude", 51, 60, FieldType::Real),
    FieldSpec::new("latitude_flag", 61, 62, FieldType::Character),
    FieldSpec::new("longitude", 63, 72, FieldType::Real),
    FieldSpec::new("longitude_flag", 73, 74, FieldType::Character),
    FieldSpec::new("elevation", 75, 81, FieldType::Real),
    FieldSpec::new("elevation_flag", 82, 83, FieldType::Character),
    FieldSpec::new("year", 84, 88, FieldType::Integer),
    FieldSpec::new("month", 89, 91, FieldType::Integer),
    FieldSpec::new("day", 92, 94, FieldType::Integer),
    FieldSpec::new("hour", 95, 97, FieldType::Integer),
    FieldSpec::new("date_indicator", 98, 99, FieldType::Integer),
    FieldSpec::new("event", 100, 119, FieldType::Character),
    FieldSpec::new("altitude_indicator", 120, 122, FieldType::Character),
    FieldSpec::new("before_info", 123, 163, FieldType::Character),
    FieldSpec::new("before_flag", 163, 164, FieldType::Character),
    FieldSpec::new("link", 165, 167, FieldType::Character),
    FieldSpec::new("after_info", 168, 208, FieldType::Character),
    FieldSpec::new("after_flag", 208, 209, FieldType::Character),
    FieldSpec::new("reference", 210, 235, FieldType::Character),
    FieldSpec::new("comment", 235, 315, FieldType::Character),
    FieldSpec::new("update_comment", 315, 346, FieldType::Character),
    FieldSpec::new("update_date", 347, 354, FieldType::Character),
];

/// Position values at or beyond these magnitudes encode "not recorded".
const MISSING_LATITUDE: f64 = -98.8888;
const MISSING_LONGITUDE: f64 = -998.8888;
const MISSING_ELEVATION: f64 = -998.8;

/// Parse the lines of a station-history metadata file.
///
/// Decode failures propagate: unlike the UADB sounding feed, this file is
/// curated and a malformed record means the wrong file or a layout change.
pub fn parse_station_history<S: AsRef<str>>(lines: &[S]) -> Result<Vec<StationEvent>> {
    let mut events = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.is_empty() {
            continue;
        }
        let fields = decode_fixed_width(line, HISTORY_SCHEMA, i + 1)?;

        let year = fields.integer("year")?;
        let month = repair(fields.integer("month")?, 6);
        let day = repair(fields.integer("day")?, 15);
        let hour = repair(fields.integer("hour")?, 0);

        let date = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
            .and_then(|d| d.and_hms_opt(hour as u32, 0, 0))
            .ok_or_else(|| {
                IgraError::timestamp(format!("{year}-{month}-{day} {hour}:00"), i + 1)
            })?;

        let event = StationEvent {
            igra_id: fields.character("igra_id")?.trim().to_string(),
            wmo_id: Some(fields.integer("wmo_id")?).filter(|&id| id != 99999),
            name: fields.character("name")?.trim().to_string(),
            name_flag: fields.character("name_flag")?.trim().to_string(),
            latitude: position(fields.real("latitude")?, 90.0, MISSING_LATITUDE),
            latitude_flag: fields.character("latitude_flag")?.trim().to_string(),
            longitude: position(fields.real("longitude")?, 180.0, MISSING_LONGITUDE),
            longitude_flag: fields.character("longitude_flag")?.trim().to_string(),
            elevation: Some(fields.real("elevation")?).filter(|&e| e != MISSING_ELEVATION),
            elevation_flag: fields.character("elevation_flag")?.trim().to_string(),
            date,
            date_indicator: fields.integer("date_indicator")?,
            event: fields.character("event")?.trim().to_string(),
            altitude_indicator: fields.character("altitude_indicator")?.trim().to_string(),
            before_info: fields.character("before_info")?.trim().to_string(),
            before_flag: fields.character("before_flag")?.trim().to_string(),
            link: fields.character("link")?.trim().to_string(),
            after_info: fields.character("after_info")?.trim().to_string(),
            after_flag: fields.character("after_flag")?.trim().to_string(),
            reference: fields.character("reference")?.trim().to_string(),
            comment: fields.character("comment")?.trim().to_string(),
            update_comment: fields.character("update_comment")?.trim().to_string(),
            update_date: fields.character("update_date")?.trim().to_string(),
        };
        event.validate()?;
        events.push(event);
    }

    debug!(events = events.len(), "parsed station history");
    Ok(events)
}

/// Replace the 99 missing marker in a date part.
fn repair(value: i64, default: i64) -> i64 {
    if value == 99 {
        default
    } else {
        value
    }
}

/// A coordinate, with the documented missing code and range check applied.
fn position(value: f64, bound: f64, missing_code: f64) -> Option<f64> {
    Some(value).filter(|&v| v != missing_code && v.abs() <= bound)
}
