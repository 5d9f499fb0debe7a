//! Error taxonomy shared by identifiers, parsers, ranges and renderers.

use thiserror::Error;

use crate::core::types::LookupScheme;

/// Errors raised while building, converting or comparing references.
///
/// Every variant is raised where the problem is detected and passed back
/// unchanged; nothing in the library recovers from these locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefError {
    /// Malformed input: wrong width, non-numeric field, bad delimiters
    #[error("Invalid reference format: {0}")]
    Format(String),

    /// A book, name, ordinal or chapter has no catalog entry
    #[error("No match for {scheme} '{key}'")]
    NotFound { scheme: LookupScheme, key: String },

    /// Wrong identifier kind for `includes` or `simplify`
    #[error("Incompatible reference kinds: {0}")]
    IncompatibleKind(String),

    /// Dropping a non-default word part would lose information
    #[error("Cannot omit part '{part}' of {id}: only the default part '1' may be dropped")]
    LossyConversion { id: String, part: char },

    /// Range endpoints name different books
    #[error("Range endpoints {start} and {end} are in different books")]
    CrossBook { start: String, end: String },

    /// Range start comes after range end
    #[error("Range start {start} must not follow end {end}")]
    Order { start: String, end: String },

    /// Documented gap in functionality
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl RefError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    pub(crate) fn not_found(scheme: LookupScheme, key: impl Into<String>) -> Self {
        Self::NotFound {
            scheme,
            key: key.into(),
        }
    }

    /// Returns true if this error reports malformed input.
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Returns true if this error reports a failed catalog lookup.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
