//! Parser for IGRA v2 sounding data files
//!
//! IGRA v2 station files are fixed-width text: a `#` header record carrying
//! station identity, timestamp and position, followed by exactly `NUMLEV`
//! data records. The count is a hard format invariant here; a mismatch is a
//! structural error, not something to resynchronize past.
//!
//! ## Architecture
//!
//! - [`header`] - Header record schema, timestamp repair and decoding
//! - [`record`] - Data record schema, scaling and sentinel normalization
//! - [`parser`] - File-level orchestration and the NUMLEV structural check

pub mod header;
pub mod parser;
pub mod record;

#[cfg(test)]
pub mod tests;

pub use parser::{parse_igra, IgraParseResult};
