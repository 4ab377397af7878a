//! Block-level UADB parsing with skip-to-next-header recovery
//!
//! The parser is a small state machine: inside a block, data lines attach to
//! the current header; after any per-block failure (day-99 header, malformed
//! header, corrupt data line) it discards lines until the next `H` line.
//! Per-record failures are logged and counted, never propagated.

use tracing::{debug, warn};

use super::header::decode_header;
use super::record::decode_data_record;
use super::stats::ParseSummary;
use crate::app::models::{LevelRecord, SoundingHeader};

/// Parsed content of one UADB station file, plus the recovery summary.
#[derive(Debug, Clone, Default)]
pub struct UadbParseResult {
    /// All level records, in file order, timestamped from their headers.
    pub levels: Vec<LevelRecord>,
    /// One header per successfully decoded sounding, in file order.
    pub headers: Vec<SoundingHeader>,
    /// What was skipped along the way.
    pub summary: ParseSummary,
}

/// Parse the lines of a UADB station file. Never fails on dirty records.
pub fn parse_uadb<S: AsRef<str>>(lines: &[S]) -> UadbParseResult {
    let mut result = UadbParseResult::default();
    // None while searching for the next usable header.
    let mut current: Option<SoundingHeader> = None;

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        result.summary.lines_read += 1;

        if line.is_empty() {
            continue;
        }

        if line.starts_with('H') {
            match decode_header(line, i + 1) {
                Ok(Some(header)) => {
                    result.headers.push(header.clone());
                    current = Some(header);
                }
                Ok(None) => {
                    warn!(line_no = i + 1, "skipping UADB block: unusable day field");
                    result.summary.blocks_skipped += 1;
                    current = None;
                }
                Err(err) => {
                    warn!(line_no = i + 1, error = %err, "skipping UADB block: malformed header");
                    result.summary.blocks_skipped += 1;
                    current = None;
                }
            }
        } else if let Some(header) = &current {
            match decode_data_record(line, header.date, i + 1) {
                Ok(record) => {
                    result.levels.push(record);
                    result.summary.levels_parsed += 1;
                }
                Err(err) => {
                    warn!(line_no = i + 1, error = %err, "skipping rest of UADB block: corrupt data line");
                    result.summary.lines_skipped += 1;
                    result.summary.blocks_skipped += 1;
                    current = None;
                }
            }
        } else {
            result.summary.lines_skipped += 1;
        }
    }

    result.summary.headers_parsed = result.headers.len();

    debug!(
        lines = result.summary.lines_read,
        soundings = result.summary.headers_parsed,
        levels = result.summary.levels_parsed,
        skipped_lines = result.summary.lines_skipped,
        skipped_blocks = result.summary.blocks_skipped,
        "parsed UADB station file"
    );

    result
}
