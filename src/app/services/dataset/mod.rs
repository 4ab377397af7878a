//! Station dataset assembly
//!
//! The top of the pipeline: load a station file, parse it with the format's
//! parser, regrid onto the target pressure set, convert reported units to
//! analysis units, and align the forward-filled station sidecar with the
//! regridded date axis. The result converts to a polars `DataFrame` at the
//! crate boundary.
//!
//! ## Architecture
//!
//! - [`metadata`] - Immutable per-variable units/standard-name annotations
//! - [`frame`] - Conversion of an assembled dataset to a polars DataFrame

use std::path::Path;

use chrono::NaiveDateTime;
use tracing::info;

use crate::app::adapters::filesystem::load_lines;
use crate::app::models::{SoundingHeader, StationSidecarRow};
use crate::app::services::igra_parser::parse_igra;
use crate::app::services::interpolator::{regrid, ProfileTable, RegridOptions};
use crate::app::services::sidecar::build_sidecar;
use crate::app::services::uadb_parser::{parse_uadb, ParseSummary};
use crate::constants::{CELSIUS_TO_KELVIN, PRESSURE_COLUMN, STANDARD_LEVELS};
use crate::Result;

use self::metadata::{metadata_for, VariableMetadata};

pub mod frame;
pub mod metadata;

#[cfg(test)]
pub mod tests;

/// Which archive format a station file is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// IGRA v2, `#`-prefixed headers.
    Igra2,
    /// NCAR UADB, `H`-prefixed headers.
    Uadb,
}

impl ArchiveFormat {
    /// Variables the format can report, in table column order.
    fn variables(self) -> &'static [&'static str] {
        match self {
            Self::Igra2 => &["pres", "gph", "temp", "rhumi", "dpd", "windd", "winds"],
            Self::Uadb => &["pres", "gph", "temp", "rhumi", "windd", "winds"],
        }
    }
}

/// Options for [`process_file`].
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Target pressure levels in Pa, ascending.
    pub levels: Vec<f64>,
    pub regrid: RegridOptions,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            levels: STANDARD_LEVELS.to_vec(),
            regrid: RegridOptions::default(),
        }
    }
}

/// One station's regridded profile data plus its sidecar.
#[derive(Debug, Clone)]
pub struct StationDataset {
    pub ident: String,
    /// Regridded per-level table: temperature in K, relative humidity as a
    /// fraction, pressure in Pa, plus the provenance flag column.
    pub data: ProfileTable,
    /// Forward-filled station position rows, one per distinct profile date.
    pub station: Vec<StationSidecarRow>,
    /// Recovery counts (UADB only; IGRA parses strictly).
    pub summary: Option<ParseSummary>,
}

impl StationDataset {
    /// Units and standard-name annotations for this dataset's output
    /// columns, including the sidecar position columns the DataFrame
    /// carries. Columns without an annotation (the provenance flag) are
    /// omitted; consumers attach these to their own output containers.
    pub fn annotations(&self) -> Vec<(&str, &'static VariableMetadata)> {
        self.data
            .column_names()
            .into_iter()
            .chain(["lat", "lon", "alt"])
            .filter_map(|name| metadata_for(name).map(|meta| (name, meta)))
            .collect()
    }
}

/// Process one station file end to end.
pub fn process_file(
    ident: &str,
    path: &Path,
    format: ArchiveFormat,
    options: &ProcessingOptions,
) -> Result<StationDataset> {
    let lines = load_lines(path)?;
    process_lines(ident, &lines, format, options)
}

/// Process already-loaded station file lines end to end.
pub fn process_lines<S: AsRef<str>>(
    ident: &str,
    lines: &[S],
    format: ArchiveFormat,
    options: &ProcessingOptions,
) -> Result<StationDataset> {
    let (levels, headers, summary) = match format {
        ArchiveFormat::Igra2 => {
            let result = parse_igra(lines)?;
            (result.levels, result.headers, None)
        }
        ArchiveFormat::Uadb => {
            let result = parse_uadb(lines);
            (result.levels, result.headers, Some(result.summary))
        }
    };

    let table = ProfileTable::from_levels(&levels, format.variables())?;
    let mut data = regrid(&table, PRESSURE_COLUMN, &options.levels, &options.regrid)?;
    convert_units(&mut data);

    let station = align_sidecar(&headers, &data);

    info!(
        ident,
        soundings = headers.len(),
        rows = data.n_rows(),
        "processed station file"
    );

    Ok(StationDataset {
        ident: ident.to_string(),
        data,
        station,
        summary,
    })
}

/// Convert reported units to analysis units, in place: temperature degrees C
/// to K, relative humidity percent to fraction. NaN passes through.
fn convert_units(data: &mut ProfileTable) {
    if let Some(temp) = data.column_mut("temp") {
        for v in temp.iter_mut() {
            *v += CELSIUS_TO_KELVIN;
        }
    }
    if let Some(rhumi) = data.column_mut("rhumi") {
        for v in rhumi.iter_mut() {
            *v /= 100.0;
        }
    }
}

/// One sidecar row per distinct regridded date, in date order.
fn align_sidecar(headers: &[SoundingHeader], data: &ProfileTable) -> Vec<StationSidecarRow> {
    let mut dates: Vec<NaiveDateTime> = data.dates().to_vec();
    dates.dedup();
    build_sidecar(headers, &dates)
}
