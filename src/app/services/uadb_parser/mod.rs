//! Parser for NCAR UADB sounding files
//!
//! UADB station files carry one `H` header line per sounding followed by its
//! data lines, in a layout unrelated to IGRA's but semantically analogous.
//! The archive is dirtier than IGRA: headers with unusable dates or corrupt
//! numeric fields occur in multi-decade files, so this parser never fails on
//! a single bad block. It logs, skips forward to the next header, and
//! reports what it skipped in a [`ParseSummary`] so data-quality regressions
//! stay observable.
//!
//! ## Architecture
//!
//! - [`header`] - Header schema, packed HHMM clock handling, day-99 detection
//! - [`record`] - Data schema, hPa -> Pa scaling, sentinel normalization
//! - [`parser`] - Block-level orchestration with skip-to-next-header recovery
//! - [`stats`] - The skip/parse summary returned alongside the tables

pub mod header;
pub mod parser;
pub mod record;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use parser::{parse_uadb, UadbParseResult};
pub use stats::ParseSummary;
