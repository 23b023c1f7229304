//! Error types.
//!
//! Resolution and aggregation are total and never fail. Errors only arise
//! when building records from loosely-typed input (program type strings,
//! ISO dates) or when a caller asks for explicit validation.

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate-wide error.
#[derive(Debug, Error)]
pub enum Error {
    /// A program type string that is neither `dayOfWeek` nor `custom`.
    #[error("unknown program type: {0}")]
    UnknownProgramType(String),

    /// A date string that is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A program failed one or more integrity checks.
    #[error("program failed validation with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
}

/// Result alias for fallible constructors.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses an ISO `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| {
        Error::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}
