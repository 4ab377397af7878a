//! Vertical regridding of sounding profiles onto fixed pressure grids
//!
//! The engine takes the per-level table a parser produced, groups rows by
//! sounding timestamp, and interpolates every variable column onto a target
//! pressure set, linearly in ln(pressure). Atmospheric variables decay
//! quasi-exponentially with height, so the interpolation must stay
//! log-linear; linear-in-pressure would bias every derived value.
//!
//! ## Architecture
//!
//! - [`table`] - The in-memory profile table (date index + named f64 columns)
//! - [`profile`] - Per-column interpolation: finite filtering, dedup,
//!   minimum-level policy, no extrapolation
//! - [`regrid`] - Per-profile orchestration, provenance flags, output assembly

pub mod profile;
pub mod regrid;
pub mod table;

#[cfg(test)]
pub mod tests;

pub use regrid::{regrid, RegridOptions};
pub use table::{ProfileColumn, ProfileTable};
