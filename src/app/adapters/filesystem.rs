//! Filesystem access for station archive files
//!
//! Archives are processed whole-file-in-memory: a station file is at most
//! tens of megabytes decompressed, and the parsers want random access to the
//! line buffer for their structural checks. Gzip members are decompressed
//! transparently; retrieval of the archives themselves (HTTP/FTP) is a
//! collaborator outside this crate and only hands us a local path.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::debug;

use crate::Result;

/// Read a station file into a line buffer, decompressing `.gz` files.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let mut file = File::open(path)?;

    let mut text = String::new();
    if path.extension().is_some_and(|ext| ext == "gz") {
        GzDecoder::new(file).read_to_string(&mut text)?;
    } else {
        file.read_to_string(&mut text)?;
    }

    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "loaded station file");
    Ok(lines)
}
