//! Error types for notification parsing.

use crate::JsonShape;
use thiserror::Error;

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Structural failures that abort the parse of a whole payload.
///
/// Per-attribute anomalies are not errors; they are reported as
/// [`Diagnostic`](crate::Diagnostic)s and the attribute is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not JSON, not UTF-8, or not the expected top-level shape.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// A field the dialect requires is absent or not a string.
    #[error("missing required field `{field}` on {context}")]
    MissingRequiredField { field: &'static str, context: String },

    /// A nested value the dialect requires to be an object is something else.
    #[error("{context} must be {expected}, found {found}")]
    InvalidShape {
        context: String,
        expected: &'static str,
        found: JsonShape,
    },

    /// The payload exceeds the configured size limit.
    #[error("payload too large: {size} bytes (limit {limit})")]
    PayloadTooLarge { size: usize, limit: usize },

    /// Invalid caller input such as an unknown dialect tag.
    #[error(transparent)]
    Input(#[from] ngsi_types::Error),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedJson(err.to_string())
    }
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::MalformedJson(format!("payload is not valid UTF-8: {err}"))
    }
}

pub(crate) fn missing(field: &'static str, context: impl Into<String>) -> ParseError {
    ParseError::MissingRequiredField {
        field,
        context: context.into(),
    }
}
