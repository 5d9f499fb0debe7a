use crate::catalog::store::BookCatalog;
use crate::core::error::RefError;
use crate::core::simplify::Reference;
use crate::core::types::LookupScheme;
use crate::parsing::{build_reference, split_chapter_verse};

/// Parse a reference by English book name: `Genesis`, `Genesis 2`,
/// `Genesis 2:3`, `1 Corinthians 13:4`.
///
/// The book is the longest known name the text starts with, so `1 John 3`
/// never resolves to John. Close spellings such as `Psalm` are accepted.
///
/// Longest match also applies to names ending in a number: `Psalm 151` is
/// its own book, so `Psalm 151 1:1` is its first verse and `Psalm 151:1`
/// is rejected rather than read as Psalms 151:1. Use `Psalms 151:1` for the
/// psalm.
///
/// # Errors
///
/// Returns `RefError::NotFound` if the text starts with no known name, and
/// `RefError::Format` if the name runs into the rest of a word or the
/// chapter and verse are malformed.
pub fn parse_name(text: &str, catalog: &BookCatalog) -> Result<Reference, RefError> {
    let name = catalog
        .name_matcher()
        .find_longest(text)
        .ok_or_else(|| RefError::not_found(LookupScheme::Name, text))?;
    let book = catalog.lookup_by_full_name(name)?;
    tracing::debug!(name, book = %book.abbreviation, "Matched book name");

    let remainder = &text[name.len()..];
    if remainder.is_empty() {
        return build_reference(&book.code, None, None);
    }
    let Some(rest) = remainder.strip_prefix(' ') else {
        return Err(RefError::format(format!(
            "Book name '{name}' is followed by '{remainder}' without a space: '{text}'"
        )));
    };
    let (chapter, verse) = split_chapter_verse(text, rest, ':')?;
    build_reference(&book.code, Some(chapter), verse)
}
