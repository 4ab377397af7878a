//! Station sidecar construction
//!
//! Position and ancillary values ride along the regridded profiles but are
//! never interpolated: each profile timestamp takes the last known header
//! values at or before it. Duplicate header timestamps keep the last
//! occurrence, and timestamps before the first header have nothing to
//! propagate, so they come back missing.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::app::models::{SoundingHeader, StationSidecarRow};

#[cfg(test)]
pub mod tests;

/// Forward-fill header position values onto `target_dates`.
///
/// `target_dates` is typically the distinct date axis of a regridded profile
/// table. Headers need not be sorted; they are ordered here and deduplicated
/// last-wins per timestamp before filling.
pub fn build_sidecar(
    headers: &[SoundingHeader],
    target_dates: &[NaiveDateTime],
) -> Vec<StationSidecarRow> {
    // Stable sort, then keep the last header of any duplicated timestamp.
    let mut ordered: Vec<&SoundingHeader> = headers.iter().collect();
    ordered.sort_by_key(|h| h.date);
    let mut deduped: Vec<&SoundingHeader> = Vec::with_capacity(ordered.len());
    for header in ordered {
        match deduped.last_mut() {
            Some(last) if last.date == header.date => *last = header,
            _ => deduped.push(header),
        }
    }

    let rows: Vec<StationSidecarRow> = target_dates
        .iter()
        .map(|&date| {
            // Last header at or before this date.
            let idx = deduped.partition_point(|h| h.date <= date);
            match idx.checked_sub(1).map(|i| deduped[i]) {
                Some(header) => StationSidecarRow {
                    date,
                    lat: header.lat,
                    lon: header.lon,
                    elevation: header.elevation,
                    numlev: Some(header.numlev),
                },
                None => StationSidecarRow::missing(date),
            }
        })
        .collect();

    debug!(
        headers = headers.len(),
        rows = rows.len(),
        "built station sidecar"
    );
    rows
}
