//! UADB header record decoding
//!
//! Space-delimited fixed columns, 0-based half-open in the schema below.
//! The clock is packed as HHMM in a single field; minutes outside [0, 59]
//! are clamped to 0 except exactly 60, which maps to 59 (a known agency
//! encoding of "end of hour"). A day field of 99 marks the whole header
//! unusable and is signalled to the caller as `Ok(None)` so it can skip the
//! block rather than abort the file.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::trace;

use crate::app::models::SoundingHeader;
use crate::app::services::fixed_width::{decode_fixed_width, FieldSpec, FieldType};
use crate::{IgraError, Result};

/// Header record layout, 0-based half-open columns.
pub const HEADER_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("usi", 2, 14, FieldType::Integer),
    FieldSpec::new("ident", 15, 21, FieldType::Character),
    FieldSpec::new("id_flag", 22, 24, FieldType::Integer),
    FieldSpec::new("source", 25, 28, FieldType::Integer),
    FieldSpec::new("version", 29, 34, FieldType::Real),
    FieldSpec::new("date_flag", 35, 37, FieldType::Integer),
    FieldSpec::new("year", 38, 42, FieldType::Character),
    FieldSpec::new("month", 43, 45, FieldType::Character),
    FieldSpec::new("day", 46, 48, FieldType::Character),
    FieldSpec::new("hour", 49, 53, FieldType::Character),
    FieldSpec::new("loc_flag", 54, 57, FieldType::Integer),
    FieldSpec::new("lat", 58, 67, FieldType::Real),
    FieldSpec::new("lon", 68, 78, FieldType::Real),
    FieldSpec::new("elevation", 79, 85, FieldType::Real),
    FieldSpec::new("station_type", 86, 88, FieldType::Integer),
    FieldSpec::new("numlev", 89, 93, FieldType::Integer),
    FieldSpec::new("product_version", 94, 102, FieldType::Character),
];

/// Decode one `H` header line.
///
/// `Ok(None)` means the header is unusable (day = 99) and the block should
/// be skipped. `Err` means a field failed to decode; the caller downgrades
/// that to the same recovery.
pub fn decode_header(line: &str, line_no: usize) -> Result<Option<SoundingHeader>> {
    let fields = decode_fixed_width(line, HEADER_SCHEMA, line_no)?;

    let day = fields.character("day")?.trim().to_string();
    if day.contains("99") {
        return Ok(None);
    }

    let numlev = fields.integer("numlev")?;
    if numlev < 0 {
        return Err(IgraError::decode("numlev", numlev.to_string(), line_no));
    }

    let date = assemble_timestamp(
        fields.character("year")?,
        fields.character("month")?,
        &day,
        fields.character("hour")?,
        line_no,
    )?;

    let mut header = SoundingHeader {
        date,
        ident: fields.character("ident")?.trim().to_string(),
        numlev: numlev as usize,
        lat: Some(fields.real("lat")?),
        lon: Some(fields.real("lon")?),
        p_src: None,
        np_src: None,
        usi: Some(fields.integer("usi")?),
        station_type: Some(fields.integer("station_type")?),
        elevation: Some(fields.real("elevation")?),
    };
    header.sanitize_coordinates();

    trace!(ident = %header.ident, date = %header.date, numlev = header.numlev, "decoded UADB header");
    Ok(Some(header))
}

/// Build the sounding timestamp from the header's date fields and packed
/// HHMM clock. A "99" in the hour field becomes "00" before unpacking --
/// the same scoped repair the IGRA feed needs.
fn assemble_timestamp(
    year: &str,
    month: &str,
    day: &str,
    hour: &str,
    line_no: usize,
) -> Result<NaiveDateTime> {
    let raw = format!("{year}-{month}-{day} {hour}");

    let hour = hour.replace("99", "00");
    let packed = hour
        .trim()
        .parse::<i64>()
        .map_err(|_| IgraError::decode("hour", hour.clone(), line_no))?;

    let hh = packed / 100;
    let minutes = match packed % 100 {
        m @ 0..=59 => m,
        60 => 59,
        _ => 0,
    };

    let year = parse_part(year, "year", line_no)?;
    let month = parse_part(month, "month", line_no)?;
    let day = parse_part(day, "day", line_no)?;

    NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
        .and_then(|d| d.and_hms_opt(hh as u32, minutes as u32, 0))
        .ok_or_else(|| IgraError::timestamp(raw, line_no))
}

fn parse_part(raw: &str, field: &'static str, line_no: usize) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| IgraError::decode(field, raw, line_no))
}
