//! Per-variable metadata annotations
//!
//! Units and CF-style standard names for the variables the pipeline
//! produces. This is an immutable lookup passed to the annotation step, not
//! process-global mutable state; consumers attach it to their own output
//! containers.

/// Units and naming for one output variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableMetadata {
    pub units: &'static str,
    pub standard_name: &'static str,
}

/// Metadata table for the post-conversion output variables.
pub const VARIABLE_METADATA: &[(&str, VariableMetadata)] = &[
    (
        "pres",
        VariableMetadata {
            units: "Pa",
            standard_name: "air_pressure",
        },
    ),
    (
        "gph",
        VariableMetadata {
            units: "m",
            standard_name: "geopotential_height",
        },
    ),
    (
        "temp",
        VariableMetadata {
            units: "K",
            standard_name: "air_temperature",
        },
    ),
    (
        "rhumi",
        VariableMetadata {
            units: "1",
            standard_name: "relative_humidity",
        },
    ),
    (
        "dpd",
        VariableMetadata {
            units: "K",
            standard_name: "dew_point_depression",
        },
    ),
    (
        "windd",
        VariableMetadata {
            units: "degree",
            standard_name: "wind_to_direction",
        },
    ),
    (
        "winds",
        VariableMetadata {
            units: "m/s",
            standard_name: "wind_speed",
        },
    ),
    (
        "lat",
        VariableMetadata {
            units: "degrees_north",
            standard_name: "latitude",
        },
    ),
    (
        "lon",
        VariableMetadata {
            units: "degrees_east",
            standard_name: "longitude",
        },
    ),
    (
        "alt",
        VariableMetadata {
            units: "m",
            standard_name: "altitude_above_sea_level",
        },
    ),
];

/// Look up the annotation for a variable, if it is a known output variable.
pub fn metadata_for(name: &str) -> Option<&'static VariableMetadata> {
    VARIABLE_METADATA
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, m)| m)
}
