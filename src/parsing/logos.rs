use crate::catalog::store::BookCatalog;
use crate::core::error::RefError;
use crate::core::fields;
use crate::core::simplify::Reference;
use crate::parsing::build_reference;

/// Prefix token of a Logos Bible reference
pub const LOGOS_PREFIX: &str = "bible";

/// Parse a Logos dotted reference such as `bible.62.4.3`.
///
/// The book is the Logos ordinal, not the canonical code: `bible.62` is Mark
/// (code `41`). The `bible.` prefix may be omitted.
///
/// # Errors
///
/// Returns `RefError::Format` for malformed input, or `RefError::NotFound`
/// for an ordinal the catalog does not know.
pub fn parse_logos(text: &str, catalog: &BookCatalog) -> Result<Reference, RefError> {
    let body = text
        .strip_prefix(LOGOS_PREFIX)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(text);

    let parts: Vec<&str> = body.split('.').collect();
    if parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(RefError::format(format!(
            "Expected bible.BOOK[.CHAPTER[.VERSE]]: '{text}'"
        )));
    }

    let ordinal = fields::parse_field("Logos book ordinal", parts[0])?;
    let book = catalog.lookup_by_ordinal(ordinal)?;
    tracing::debug!(ordinal, book = %book.abbreviation, "Resolved Logos ordinal");

    build_reference(&book.code, parts.get(1).copied(), parts.get(2).copied())
}
