//! Error handling for radiosonde archive processing.
//!
//! Provides a single error enum covering field decoding, format structure,
//! interpolation schema problems, and the surrounding I/O and table layers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IgraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// A fixed-width field could not be coerced to its declared type.
    /// Always propagated: it indicates a corrupt or unsupported layout.
    #[error("decode error at line {line_no}: field '{field}' from {raw:?}")]
    Decode {
        field: &'static str,
        raw: String,
        line_no: usize,
    },

    /// A format invariant was violated (header/data-count agreement).
    #[error(
        "structural error at line {line_no}: header declares {expected} data records, found {actual}"
    )]
    Structure {
        line_no: usize,
        expected: usize,
        actual: usize,
    },

    /// The caller asked for an interpolation the table cannot support.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// A repaired header timestamp still failed to parse as a calendar date.
    #[error("timestamp error at line {line_no}: {raw:?}")]
    Timestamp { raw: String, line_no: usize },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl IgraError {
    pub fn decode(field: &'static str, raw: impl Into<String>, line_no: usize) -> Self {
        Self::Decode {
            field,
            raw: raw.into(),
            line_no,
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    pub fn timestamp(raw: impl Into<String>, line_no: usize) -> Self {
        Self::Timestamp {
            raw: raw.into(),
            line_no,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IgraError>;
