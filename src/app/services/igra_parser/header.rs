//! IGRA v2 header record decoding
//!
//! Header layout (1-based inclusive columns from the format description):
//!
//! ```text
//! HEADREC  1-  1  ID    2- 12  YEAR 14- 17  MONTH 19- 20  DAY 22- 23
//! HOUR    25- 26  RELTIME 28- 31  NUMLEV 33- 36
//! P_SRC   38- 45  NP_SRC 47- 54  LAT 56- 62  LON 64- 71
//! ```
//!
//! HOUR 99 means the nominal hour is missing and the release time carries the
//! clock; RELTIME 9999 means both are missing. Latitude and longitude are
//! scaled integers (degrees x 10000).

use chrono::NaiveDateTime;
use tracing::trace;

use crate::app::models::SoundingHeader;
use crate::app::services::fixed_width::{decode_fixed_width, FieldSpec, FieldType};
use crate::{IgraError, Result};

/// Header record layout, 0-based half-open columns.
pub const HEADER_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("id", 1, 12, FieldType::Character),
    FieldSpec::new("year", 13, 17, FieldType::Character),
    FieldSpec::new("month", 18, 20, FieldType::Character),
    FieldSpec::new("day", 21, 23, FieldType::Character),
    FieldSpec::new("hour", 24, 26, FieldType::Character),
    FieldSpec::new("reltime", 27, 31, FieldType::Character),
    FieldSpec::new("numlev", 32, 36, FieldType::Integer),
    FieldSpec::new("p_src", 37, 45, FieldType::Character),
    FieldSpec::new("np_src", 46, 54, FieldType::Character),
    FieldSpec::new("lat", 55, 62, FieldType::Integer),
    FieldSpec::new("lon", 63, 71, FieldType::Integer),
];

/// Decode one `#` header line into a [`SoundingHeader`].
pub fn decode_header(line: &str, line_no: usize) -> Result<SoundingHeader> {
    let fields = decode_fixed_width(line, HEADER_SCHEMA, line_no)?;

    let ident = fields.character("id")?.trim().to_string();
    let numlev = fields.integer("numlev")?;
    if numlev < 0 {
        return Err(IgraError::decode("numlev", numlev.to_string(), line_no));
    }

    let date = assemble_timestamp(
        fields.character("year")?,
        fields.character("month")?,
        fields.character("day")?,
        fields.character("hour")?,
        fields.character("reltime")?,
        line_no,
    )?;

    let mut header = SoundingHeader {
        date,
        ident,
        numlev: numlev as usize,
        lat: Some(fields.integer("lat")? as f64 / 10_000.0),
        lon: Some(fields.integer("lon")? as f64 / 10_000.0),
        p_src: Some(fields.character("p_src")?.trim().to_string()),
        np_src: Some(fields.character("np_src")?.trim().to_string()),
        usi: None,
        station_type: None,
        elevation: None,
    };
    header.sanitize_coordinates();

    trace!(ident = %header.ident, date = %header.date, numlev = header.numlev, "decoded IGRA header");
    Ok(header)
}

/// Build the sounding timestamp from the header's date and time fields.
///
/// If HOUR is 99 the release time supplies hour and minute; otherwise the
/// nominal hour stands with zeroed minutes. Any "99" still present in the
/// assembled HHMMSS string (a known irregularity of the source feed,
/// including RELTIME 9999) becomes "00". Best-effort repair, scoped to
/// exactly this substitution.
fn assemble_timestamp(
    year: &str,
    month: &str,
    day: &str,
    hour: &str,
    reltime: &str,
    line_no: usize,
) -> Result<NaiveDateTime> {
    let time = if hour.trim() == "99" {
        format!("{reltime}00")
    } else {
        format!("{hour}0000")
    };
    let time = time.replace("99", "00");

    let stamp = format!("{year}{month}{day}{time}");
    NaiveDateTime::parse_from_str(&stamp, "%Y%m%d%H%M%S")
        .map_err(|_| IgraError::timestamp(stamp, line_no))
}
