//! Application constants for radiosonde archive processing
//!
//! This module contains the canonical pressure grids, missing-value sentinel
//! sets, and provenance flag values used throughout the processing pipeline.

// =============================================================================
// Target Pressure Grids
// =============================================================================

/// Standard 16-level pressure grid in Pa, ascending.
///
/// The classic radiosonde reporting levels from 10 hPa to 1000 hPa, used as
/// the default regridding target.
pub const STANDARD_LEVELS: [f64; 16] = [
    1_000.0, 2_000.0, 3_000.0, 5_000.0, 7_000.0, 10_000.0, 15_000.0, 20_000.0, 25_000.0, 30_000.0,
    40_000.0, 50_000.0, 70_000.0, 85_000.0, 92_500.0, 100_000.0,
];

/// Extended 31-level pressure grid in Pa, ascending.
///
/// The finer reanalysis-style grid, for consumers that want more vertical
/// resolution in the lower troposphere.
pub const EXTENDED_LEVELS: [f64; 32] = [
    1_000.0, 2_000.0, 3_000.0, 5_000.0, 7_000.0, 10_000.0, 12_500.0, 15_000.0, 17_500.0, 20_000.0,
    22_500.0, 25_000.0, 30_000.0, 35_000.0, 40_000.0, 45_000.0, 50_000.0, 55_000.0, 60_000.0,
    65_000.0, 70_000.0, 75_000.0, 77_500.0, 80_000.0, 82_500.0, 85_000.0, 87_500.0, 90_000.0,
    92_500.0, 95_000.0, 97_500.0, 100_000.0,
];

// =============================================================================
// Missing-Value Sentinels
// =============================================================================

/// Sentinel values used by the IGRA v2 data files.
///
/// Raw integer codes, compared before tenths scaling: -9999 = missing prior
/// to quality assurance, -8888 = removed by quality assurance.
pub mod igra_sentinels {
    pub const ALL: [i64; 2] = [-9999, -8888];
}

/// Sentinel values used by the NCAR UADB files.
///
/// Compared against raw decoded values before any unit scaling, so a missing
/// pressure cannot survive the hPa -> Pa conversion as a bogus physical value.
pub mod uadb_sentinels {
    pub const ALL: [f64; 5] = [-999.9, -9999.0, -999.0, -99999.0, -99999.9];
}

// =============================================================================
// Interpolation Provenance Flags
// =============================================================================

/// Values of the `flag_int` column attached by the regridding engine.
pub mod provenance {
    /// Level pressure was present in the profile as measured.
    pub const ORIGINAL: f64 = 0.0;

    /// Level exists only on the target grid; values are interpolated.
    pub const INTERPOLATED: f64 = 1.0;

    /// Original level retained alongside the target grid but absent from it.
    /// Only emitted when old levels are kept.
    pub const RAW_ONLY: f64 = 2.0;
}

/// Name of the provenance column added by the regridding engine.
pub const PROVENANCE_COLUMN: &str = "flag_int";

/// Default pressure column name produced by both archive parsers.
pub const PRESSURE_COLUMN: &str = "pres";

// =============================================================================
// Unit Conversion
// =============================================================================

/// Offset from degrees Celsius to Kelvin.
pub const CELSIUS_TO_KELVIN: f64 = 273.15;
