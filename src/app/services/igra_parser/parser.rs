//! File-level IGRA parsing with the NUMLEV structural check
//!
//! One pass over the line buffer: every `#` line opens a sounding whose
//! declared level count must be matched exactly by the data lines that
//! follow. Too few lines, too many lines, or data with no governing header
//! all violate the format contract and propagate as structural errors --
//! IGRA files are machine-written and a count mismatch means the file is
//! corrupt, not dirty.

use tracing::debug;

use super::header::decode_header;
use super::record::decode_data_record;
use crate::app::models::{LevelRecord, SoundingHeader};
use crate::{IgraError, Result};

/// Parsed content of one IGRA station file.
#[derive(Debug, Clone, Default)]
pub struct IgraParseResult {
    /// All level records, in file order, timestamped from their headers.
    pub levels: Vec<LevelRecord>,
    /// One header per sounding, in file order.
    pub headers: Vec<SoundingHeader>,
}

/// Parse the lines of an IGRA v2 station file.
pub fn parse_igra<S: AsRef<str>>(lines: &[S]) -> Result<IgraParseResult> {
    let mut levels = Vec::new();
    let mut headers: Vec<SoundingHeader> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].as_ref();
        if line.is_empty() {
            i += 1;
            continue;
        }

        if !line.starts_with('#') {
            // Data lines outside any header block: the previous header (if
            // any) under-declared its count.
            let extra = lines[i..]
                .iter()
                .take_while(|l| !l.as_ref().starts_with('#') && !l.as_ref().is_empty())
                .count();
            let expected = headers.last().map(|h| h.numlev).unwrap_or(0);
            return Err(IgraError::Structure {
                line_no: i + 1,
                expected,
                actual: expected + extra,
            });
        }

        let header = decode_header(line, i + 1)?;
        let start = i + 1;
        let mut consumed = 0;

        while consumed < header.numlev {
            let j = start + consumed;
            let short = j >= lines.len() || lines[j].as_ref().starts_with('#');
            if short {
                return Err(IgraError::Structure {
                    line_no: i + 1,
                    expected: header.numlev,
                    actual: consumed,
                });
            }
            levels.push(decode_data_record(lines[j].as_ref(), header.date, j + 1)?);
            consumed += 1;
        }

        i = start + header.numlev;
        headers.push(header);
    }

    debug!(
        soundings = headers.len(),
        levels = levels.len(),
        "parsed IGRA station file"
    );

    Ok(IgraParseResult { levels, headers })
}
