//! Fixed-width record decoding shared by all archive formats
//!
//! Radiosonde archives are column-oriented text: every record type is fully
//! described by an ordered table of (name, start, end, type). This module
//! keeps that table as data so the same decoder serves the IGRA sounding
//! format, the UADB sounding format, and the station-history metadata file.
//!
//! ## Architecture
//!
//! - [`schema`] - Field schema types ([`FieldSpec`], [`FieldType`])
//! - [`decoder`] - The decoder itself and the typed [`FieldMap`] it returns

pub mod decoder;
pub mod schema;

#[cfg(test)]
pub mod tests;

pub use decoder::{decode_fixed_width, FieldMap, FieldValue};
pub use schema::{FieldSpec, FieldType};
