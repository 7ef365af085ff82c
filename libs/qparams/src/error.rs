//! Error types for parameter validation.

use serde::Serialize;
use thiserror::Error;

/// The kind of value a parameter is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// A base-10 signed integer.
    Integer,
    /// A hex color with 3, 4, 6 or 8 digits.
    HexColor,
    /// A video identifier made of `[a-zA-Z0-9_-]`.
    VideoId,
    /// Any non-empty string.
    String,
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamKind::Integer => write!(f, "an integer"),
            ParamKind::HexColor => write!(f, "a hex color"),
            ParamKind::VideoId => write!(f, "a video ID"),
            ParamKind::String => write!(f, "a string"),
        }
    }
}

/// Errors raised for required parameters.
///
/// Optional parameters never produce these; they fall back to their default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// The parameter is absent or empty.
    #[error("Required parameter '{field}' is missing")]
    Missing { field: String },

    /// The parameter is present but does not hold the expected kind of value.
    #[error("{field} expects {kind} but got '{value}'")]
    Invalid {
        field: String,
        kind: ParamKind,
        value: String,
    },
}

impl ParamError {
    /// Returns the name of the parameter that failed.
    pub fn field(&self) -> &str {
        match self {
            ParamError::Missing { field } | ParamError::Invalid { field, .. } => field,
        }
    }

    /// Returns true if the parameter was absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, ParamError::Missing { .. })
    }

    /// Returns true if the parameter was present but malformed.
    pub fn is_invalid(&self) -> bool {
        matches!(self, ParamError::Invalid { .. })
    }
}
