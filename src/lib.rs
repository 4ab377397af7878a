//! IGRA Processor Library
//!
//! A Rust library for converting archived radiosonde sounding records into
//! regridded, analysis-ready station tables.
//!
//! This library provides tools for:
//! - Decoding fixed-width IGRA v2 and NCAR UADB station files with proper
//!   header/data block handling
//! - Normalizing format sentinels to missing values and reported units to
//!   analysis units
//! - Regridding each sounding onto a common pressure grid with log-pressure
//!   linear interpolation and per-level provenance flags
//! - Forward-filling a per-date station position sidecar from sounding
//!   headers
//! - Parsing IGRA station history records for metadata enrichment
//! - Comprehensive error handling and recovery

pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod dataset;
        pub mod fixed_width;
        pub mod igra_parser;
        pub mod interpolator;
        pub mod sidecar;
        pub mod station_history;
        pub mod uadb_parser;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// Re-export commonly used types
pub use app::models::{LevelRecord, SoundingHeader, StationSidecarRow};
pub use app::services::dataset::{
    process_file, process_lines, ArchiveFormat, ProcessingOptions, StationDataset,
};
pub use app::services::interpolator::{regrid, ProfileTable, RegridOptions};
pub use error::{IgraError, Result};
