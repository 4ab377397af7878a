//! In-memory profile table: a date row index plus named f64 columns
//!
//! The table is the currency between parsers, the regridding engine and the
//! polars boundary. Missing values are NaN, which mirrors the sentinel
//! normalization the parsers already performed; no sentinel integer survives
//! into a table.

use chrono::NaiveDateTime;

use crate::app::models::LevelRecord;
use crate::{IgraError, Result};

/// One named numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// A table of per-level values indexed by sounding timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileTable {
    dates: Vec<NaiveDateTime>,
    columns: Vec<ProfileColumn>,
}

/// Column names understood by [`ProfileTable::from_levels`], matching the
/// variables both archive formats can report.
pub const KNOWN_VARIABLES: &[&str] = &["pres", "gph", "temp", "rhumi", "dpd", "windd", "winds"];

impl ProfileTable {
    /// Build a table from parsed level records, keeping the named variables.
    ///
    /// `variables` selects from [`KNOWN_VARIABLES`]; an unknown name is a
    /// configuration error. Missing record values become NaN.
    pub fn from_levels(levels: &[LevelRecord], variables: &[&str]) -> Result<Self> {
        let mut columns = Vec::with_capacity(variables.len());
        for &name in variables {
            if !KNOWN_VARIABLES.contains(&name) {
                return Err(IgraError::configuration(format!(
                    "unknown variable '{name}': expected one of {KNOWN_VARIABLES:?}"
                )));
            }
            let values = levels
                .iter()
                .map(|l| extract(l, name).unwrap_or(f64::NAN))
                .collect();
            columns.push(ProfileColumn {
                name: name.to_string(),
                values,
            });
        }

        Ok(Self {
            dates: levels.iter().map(|l| l.date).collect(),
            columns,
        })
    }

    /// Build a table from raw parts, validating column lengths.
    pub fn from_columns(dates: Vec<NaiveDateTime>, columns: Vec<ProfileColumn>) -> Result<Self> {
        for column in &columns {
            if column.values.len() != dates.len() {
                return Err(IgraError::schema(format!(
                    "column '{}' has {} values for {} rows",
                    column.name,
                    column.values.len(),
                    dates.len()
                )));
            }
        }
        Ok(Self { dates, columns })
    }

    pub fn n_rows(&self) -> usize {
        self.dates.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn dates(&self) -> &[NaiveDateTime] {
        &self.dates
    }

    pub fn columns(&self) -> &[ProfileColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Vec<f64>> {
        self.columns
            .iter_mut()
            .find(|c| c.name == name)
            .map(|c| &mut c.values)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// A copy restricted to the given columns, in the order given.
    pub fn select(&self, names: &[&str]) -> Result<Self> {
        let mut columns = Vec::with_capacity(names.len());
        for &name in names {
            let column = self
                .columns
                .iter()
                .find(|c| c.name == name)
                .ok_or_else(|| IgraError::schema(format!("no column named '{name}'")))?;
            columns.push(column.clone());
        }
        Ok(Self {
            dates: self.dates.clone(),
            columns,
        })
    }
}

fn extract(level: &LevelRecord, name: &str) -> Option<f64> {
    match name {
        "pres" => level.pressure,
        "gph" => level.height,
        "temp" => level.temperature,
        "rhumi" => level.relative_humidity,
        "dpd" => level.dewpoint_depression,
        "windd" => level.wind_direction,
        "winds" => level.wind_speed,
        _ => None,
    }
}
