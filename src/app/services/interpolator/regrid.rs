//! Per-profile regridding onto a target pressure set
//!
//! Groups the table by sounding timestamp and rebuilds each profile on the
//! effective output grid, attaching a provenance flag per output level.
//! Grouping is a pure partition-and-concatenate: profiles are independent,
//! and output ordering comes only from the final (date, pressure) sort.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::debug;

use super::profile::interpolate_column;
use super::table::{ProfileColumn, ProfileTable};
use crate::constants::{provenance, PROVENANCE_COLUMN};
use crate::{IgraError, Result};

/// Options for [`regrid`].
#[derive(Debug, Clone)]
pub struct RegridOptions {
    /// Minimum count of finite, deduplicated (pressure, value) pairs a
    /// column needs before it is interpolated; below this the column is
    /// all-missing for the profile (shape preserved, never dropped).
    pub min_valid_levels: usize,

    /// Keep the profile's own levels in the output alongside the target
    /// grid, with a tri-state provenance flag.
    pub keep_old_levels: bool,

    /// Restrict regridding to these variable columns (the pressure column is
    /// always kept).
    pub variables: Option<Vec<String>>,
}

impl Default for RegridOptions {
    fn default() -> Self {
        Self {
            min_valid_levels: 3,
            keep_old_levels: false,
            variables: None,
        }
    }
}

/// Regrid every profile of `table` onto `target_levels` (Pa).
///
/// The output has one row per (profile, effective grid level), sorted by
/// (date, pressure), with a [`PROVENANCE_COLUMN`] appended: 0 = level
/// present in the profile as measured, 1 = interpolated-only, 2 = original
/// level kept alongside the target grid (only with `keep_old_levels`).
pub fn regrid(
    table: &ProfileTable,
    pressure_column: &str,
    target_levels: &[f64],
    options: &RegridOptions,
) -> Result<ProfileTable> {
    let table = match &options.variables {
        Some(variables) => {
            let mut names: Vec<&str> = vec![pressure_column];
            names.extend(
                variables
                    .iter()
                    .map(String::as_str)
                    .filter(|n| *n != pressure_column),
            );
            table.select(&names)?
        }
        None => table.clone(),
    };

    if table.column(pressure_column).is_none() {
        return Err(IgraError::schema(format!(
            "regrid requires a '{pressure_column}' pressure column"
        )));
    }
    if table.n_columns() < 2 {
        return Err(IgraError::schema(format!(
            "regrid requires at least 2 numeric columns ('{pressure_column}' plus one variable)"
        )));
    }
    if target_levels.is_empty() {
        return Err(IgraError::configuration(
            "regrid requires a non-empty target level set",
        ));
    }

    let mut targets = target_levels.to_vec();
    targets.sort_by(f64::total_cmp);
    targets.dedup();

    // Partition row indices by timestamp; BTreeMap gives the date ordering
    // of the output for free.
    let mut groups: BTreeMap<NaiveDateTime, Vec<usize>> = BTreeMap::new();
    for (row, &date) in table.dates().iter().enumerate() {
        groups.entry(date).or_default().push(row);
    }

    let mut out_dates: Vec<NaiveDateTime> = Vec::new();
    let mut out_columns: Vec<ProfileColumn> = table
        .columns()
        .iter()
        .map(|c| ProfileColumn {
            name: c.name.clone(),
            values: Vec::new(),
        })
        .collect();
    let mut out_flags: Vec<f64> = Vec::new();

    for (date, rows) in &groups {
        regrid_profile(
            &table,
            pressure_column,
            &targets,
            options,
            *date,
            rows,
            &mut out_dates,
            &mut out_columns,
            &mut out_flags,
        );
    }

    out_columns.push(ProfileColumn {
        name: PROVENANCE_COLUMN.to_string(),
        values: out_flags,
    });

    let out = ProfileTable::from_columns(out_dates, out_columns)?;
    debug!(
        rows_in = table.n_rows(),
        rows_out = out.n_rows(),
        profiles = groups.len(),
        "regridded profile table"
    );
    Ok(out)
}

/// Regrid one profile group, appending its rows to the output accumulators.
#[allow(clippy::too_many_arguments)]
fn regrid_profile(
    table: &ProfileTable,
    pressure_column: &str,
    targets: &[f64],
    options: &RegridOptions,
    date: NaiveDateTime,
    rows: &[usize],
    out_dates: &mut Vec<NaiveDateTime>,
    out_columns: &mut [ProfileColumn],
    out_flags: &mut Vec<f64>,
) {
    let pressures = table
        .column(pressure_column)
        .expect("pressure column validated by regrid");

    // Row order within the profile: ascending pressure, missing last.
    let mut sorted_rows = rows.to_vec();
    sorted_rows.sort_by(|&a, &b| pressures[a].total_cmp(&pressures[b]));

    // The profile's own finite pressures, ascending with duplicates removed.
    let mut own_levels: Vec<f64> = sorted_rows
        .iter()
        .map(|&r| pressures[r])
        .filter(|p| p.is_finite())
        .collect();
    let own_with_duplicates = own_levels.clone();
    own_levels.dedup();

    // No-op path: a profile already on the target grid is copied through
    // bit-identically rather than recomputed. Rows with a missing pressure
    // disqualify the profile so the output shape stays one row per grid level.
    if own_with_duplicates == targets && sorted_rows.len() == targets.len() {
        for &row in &sorted_rows {
            out_dates.push(date);
            for (column, out) in table.columns().iter().zip(out_columns.iter_mut()) {
                out.values.push(column.values[row]);
            }
            out_flags.push(provenance::ORIGINAL);
        }
        return;
    }

    let grid: Vec<f64> = if options.keep_old_levels {
        let mut union = targets.to_vec();
        union.extend_from_slice(&own_levels);
        union.sort_by(f64::total_cmp);
        union.dedup();
        union
    } else {
        targets.to_vec()
    };

    let profile_pressures: Vec<f64> = rows.iter().map(|&r| pressures[r]).collect();

    for (column, out) in table.columns().iter().zip(out_columns.iter_mut()) {
        if column.name == pressure_column {
            out.values.extend_from_slice(&grid);
            continue;
        }
        let profile_values: Vec<f64> = rows.iter().map(|&r| column.values[r]).collect();
        out.values.extend(interpolate_column(
            &profile_pressures,
            &profile_values,
            &grid,
            options.min_valid_levels,
        ));
    }

    for &level in &grid {
        out_dates.push(date);
        let in_own = own_levels.binary_search_by(|p| p.total_cmp(&level)).is_ok();
        let in_target = targets.binary_search_by(|p| p.total_cmp(&level)).is_ok();
        out_flags.push(match (in_own, in_target) {
            (true, true) => provenance::ORIGINAL,
            (false, true) => provenance::INTERPOLATED,
            // Union-grid levels that exist only in the profile.
            (true, false) => provenance::RAW_ONLY,
            (false, false) => unreachable!("grid level comes from target or profile"),
        });
    }
}
