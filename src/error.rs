//! Error types for civil value construction and conversion.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CivilError {
    /// The input could not be turned into a civil value, either because it
    /// is malformed or because the values it names are out of range.
    #[error("Invalid {kind}: '{input}'")]
    Invalid { kind: &'static str, input: String },

    #[error("Invalid timezone: '{0}'")]
    InvalidTimezone(String),

    /// The local date-time is skipped by a forward clock change.
    #[error("{0} does not exist in the requested timezone")]
    NonexistentLocalTime(String),

    /// The local date-time occurs twice and the caller asked to reject it.
    #[error("{0} is ambiguous in the requested timezone")]
    AmbiguousLocalTime(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid format pattern: '{0}'")]
    InvalidPattern(String),
}

impl CivilError {
    pub(crate) fn invalid(kind: &'static str, input: impl Into<String>) -> Self {
        Self::Invalid {
            kind,
            input: input.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CivilError>;
