//! Parse summary for UADB recovery reporting
//!
//! Recovered conditions must be counted, not silently discarded: a
//! multi-year archive parse should finish, and the caller should still see
//! how much of the file it lost.

use serde::{Deserialize, Serialize};

/// Counts accumulated over one UADB file parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParseSummary {
    /// Total lines visited, including skipped ones.
    pub lines_read: usize,

    /// Headers successfully decoded.
    pub headers_parsed: usize,

    /// Data records successfully decoded.
    pub levels_parsed: usize,

    /// Lines discarded while searching for the next header.
    pub lines_skipped: usize,

    /// Blocks abandoned because of an unusable or malformed header, or a
    /// corrupt data line.
    pub blocks_skipped: usize,
}

impl ParseSummary {
    /// True when the whole file parsed without recovery.
    pub fn is_clean(&self) -> bool {
        self.lines_skipped == 0 && self.blocks_skipped == 0
    }
}
