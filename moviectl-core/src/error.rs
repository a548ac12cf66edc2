//! Errors raised while turning a list request's query string into a `MovieQuery`.
//!
//! Each variant's message is returned verbatim to API clients, so the wording
//! names the offending parameter rather than internal details.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Query parameter names a field that movies don't have
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// Filter key looks like `field[op` or `field[]`
    #[error("Malformed filter key '{0}'")]
    MalformedKey(String),

    /// Operator is not one of gte/gt/lte/lt, or not valid for the field type
    #[error("Unsupported operator '{op}' for field '{field}'")]
    UnsupportedOperator { field: String, op: String },

    /// Filter value does not parse as the field's type
    #[error("Invalid value '{value}' for field '{field}': expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },

    /// List-valued fields have no ordering
    #[error("Cannot sort by '{0}'")]
    NotSortable(String),

    /// `fields=name,-price`
    #[error("Field selection cannot mix inclusion and exclusion")]
    MixedProjection,
}
