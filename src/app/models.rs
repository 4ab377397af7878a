//! Data models for radiosonde archive processing
//!
//! This module contains the core data structures for representing sounding
//! headers, per-level observations, and station ancillary information, based
//! on the IGRA v2 and NCAR UADB format specifications.

use crate::{IgraError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// =============================================================================
// Level Type Indicators
// =============================================================================

/// Major level type indicator from the first digit of a data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum LevelTypeMajor {
    /// Standard pressure level (1000, 925, 850, ... hPa).
    StandardPressure,
    /// Non-standard pressure level.
    OtherPressure,
    /// Non-pressure level, vertical coordinate identified only by height.
    NonPressure,
}

impl LevelTypeMajor {
    pub fn from_digit(digit: i64) -> Option<Self> {
        match digit {
            1 => Some(Self::StandardPressure),
            2 => Some(Self::OtherPressure),
            3 => Some(Self::NonPressure),
            _ => None,
        }
    }
}

/// Minor level type indicator from the second digit of a data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum LevelTypeMinor {
    Surface,
    Tropopause,
    Other,
}

impl LevelTypeMinor {
    pub fn from_digit(digit: i64) -> Option<Self> {
        match digit {
            1 => Some(Self::Surface),
            2 => Some(Self::Tropopause),
            0 => Some(Self::Other),
            _ => None,
        }
    }
}

/// Climatology-based quality assurance flag attached to pressure, height and
/// temperature values in IGRA v2 records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum QaFlag {
    /// Not checked by any climatology check.
    NotChecked,
    /// Within tier-1 climatological limits.
    Tier1,
    /// Passed both tier-1 and tier-2 climatology checks.
    Tier2,
}

impl QaFlag {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::NotChecked),
            'A' => Some(Self::Tier1),
            'B' => Some(Self::Tier2),
            _ => None,
        }
    }
}

// =============================================================================
// Sounding Header
// =============================================================================

/// One sounding header: launch timestamp, station identity and position.
///
/// A header precedes exactly `numlev` data records in the source stream.
/// The UADB-only fields (`usi`, `station_type`, `elevation`) are `None` for
/// IGRA soundings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SoundingHeader {
    /// Observation timestamp (UTC, minute precision after repair).
    pub date: NaiveDateTime,

    /// Station identification code (11-char IGRA id or WMO number).
    pub ident: String,

    /// Number of data records following this header.
    pub numlev: usize,

    /// Latitude in degrees, [-90, 90], if reported.
    pub lat: Option<f64>,

    /// Longitude in degrees, [-180, 180], if reported.
    pub lon: Option<f64>,

    /// Data source code for pressure levels (IGRA only).
    pub p_src: Option<String>,

    /// Data source code for non-pressure levels (IGRA only).
    pub np_src: Option<String>,

    /// Unique station identifier (UADB only).
    pub usi: Option<i64>,

    /// Station type code (UADB only).
    pub station_type: Option<i64>,

    /// Station elevation in meters (UADB only).
    pub elevation: Option<f64>,
}

impl SoundingHeader {
    /// Validate coordinate ranges, mapping out-of-range values to missing.
    ///
    /// Mobile stations occasionally report garbage positions; the position is
    /// ancillary, so a bad coordinate degrades to missing rather than failing
    /// the sounding.
    pub fn sanitize_coordinates(&mut self) {
        if let Some(lat) = self.lat {
            if !(-90.0..=90.0).contains(&lat) {
                self.lat = None;
            }
        }
        if let Some(lon) = self.lon {
            if !(-180.0..=180.0).contains(&lon) {
                self.lon = None;
            }
        }
    }
}

// =============================================================================
// Level Record
// =============================================================================

/// One vertical measurement point within a sounding.
///
/// All physical values are in the units reported by the archive: pressure in
/// Pa (UADB values are scaled at decode time), geopotential height in m,
/// temperature in degrees Celsius, relative humidity in percent, dewpoint
/// depression in degrees Celsius, wind direction in degrees, wind speed in
/// m/s. `None` marks a value that was missing or removed by quality
/// assurance in the source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelRecord {
    /// Timestamp inherited from the governing header.
    pub date: NaiveDateTime,

    pub level_type_major: Option<LevelTypeMajor>,
    pub level_type_minor: Option<LevelTypeMinor>,

    /// Elapsed time since launch in seconds (IGRA only).
    pub elapsed_seconds: Option<i64>,

    /// Pressure in Pa.
    pub pressure: Option<f64>,
    pub pressure_flag: Option<QaFlag>,

    /// Geopotential height in meters above sea level.
    pub height: Option<f64>,
    pub height_flag: Option<QaFlag>,

    /// Temperature in degrees Celsius.
    pub temperature: Option<f64>,
    pub temperature_flag: Option<QaFlag>,

    /// Relative humidity in percent.
    pub relative_humidity: Option<f64>,

    /// Dewpoint depression in degrees Celsius (IGRA only).
    pub dewpoint_depression: Option<f64>,

    /// Wind direction in degrees from north (90 = east).
    pub wind_direction: Option<f64>,

    /// Wind speed in m/s.
    pub wind_speed: Option<f64>,
}

// =============================================================================
// Station Sidecar
// =============================================================================

/// Station position and ancillary values carried to one profile timestamp.
///
/// Produced by forward-filling header values; never interpolated.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StationSidecarRow {
    pub date: NaiveDateTime,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub elevation: Option<f64>,
    pub numlev: Option<usize>,
}

impl StationSidecarRow {
    /// A row with no known position, for dates before the first header.
    pub fn missing(date: NaiveDateTime) -> Self {
        Self {
            date,
            lat: None,
            lon: None,
            elevation: None,
            numlev: None,
        }
    }
}

// =============================================================================
// Station History
// =============================================================================

/// One event from the IGRA station-history metadata file.
///
/// Carries the full 26-column record of the metadata readme. The `*_flag`
/// fields are single-character source codes for the value they accompany;
/// free-text fields are trimmed and may be empty.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StationEvent {
    pub igra_id: String,
    pub wmo_id: Option<i64>,
    pub name: String,
    pub name_flag: String,
    pub latitude: Option<f64>,
    pub latitude_flag: String,
    pub longitude: Option<f64>,
    pub longitude_flag: String,
    pub elevation: Option<f64>,
    pub elevation_flag: String,
    /// Event date with missing parts repaired (month 99 -> June, day 99 ->
    /// 15th, hour 99 -> 00).
    pub date: NaiveDateTime,
    /// Precision of the event date (DATEIND code).
    pub date_indicator: i64,
    pub event: String,
    /// Whether the event altered the station altitude (ALTIND code).
    pub altitude_indicator: String,
    pub before_info: String,
    pub before_flag: String,
    /// Code linking this event to a related one (LINK).
    pub link: String,
    pub after_info: String,
    pub after_flag: String,
    pub reference: String,
    pub comment: String,
    pub update_comment: String,
    /// Date the record was last revised, as written (UPDDATE).
    pub update_date: String,
}

impl StationEvent {
    /// Validate the identifier shape: IGRA ids are 11 characters.
    pub fn validate(&self) -> Result<()> {
        if self.igra_id.len() != 11 {
            return Err(IgraError::configuration(format!(
                "invalid IGRA identifier '{}': expected 11 characters",
                self.igra_id
            )));
        }
        Ok(())
    }
}
