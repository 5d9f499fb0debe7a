use crate::catalog::store::BookCatalog;
use crate::core::error::RefError;
use crate::core::simplify::Reference;
use crate::parsing::{build_reference, split_chapter_verse};

/// Parse an OSIS reference: `Gen.2.3`, `Gen.2`, `Gen`, or `Gen 2:3`.
///
/// A dot after the book means dots separate chapter and verse too; a space
/// after the book means a colon does.
///
/// # Errors
///
/// Returns `RefError::Format` for malformed input, or `RefError::NotFound`
/// for an unknown OSIS book id.
pub fn parse_osis(text: &str, catalog: &BookCatalog) -> Result<Reference, RefError> {
    let (book_token, rest) = match text.find(['.', ' ']) {
        Some(pos) => {
            let delimiter = if text[pos..].starts_with('.') { '.' } else { ':' };
            (&text[..pos], Some((&text[pos + 1..], delimiter)))
        }
        None => (text, None),
    };
    if book_token.is_empty() {
        return Err(RefError::format(format!("Missing OSIS book id: '{text}'")));
    }

    let book = catalog.lookup_by_osis(book_token)?;
    match rest {
        None => build_reference(&book.code, None, None),
        Some((rest, delimiter)) => {
            let (chapter, verse) = split_chapter_verse(text, rest, delimiter)?;
            build_reference(&book.code, Some(chapter), verse)
        }
    }
}
