//! Parsers from external reference notations into canonical identifiers.
//!
//! This module provides parsers for:
//!
//! - **Logos**: dotted references keyed by book ordinal (`bible.62.4.3`)
//! - **OSIS**: standard book ids (`Mark.4.3`, `Mark 4:3`)
//! - **Full names**: English book names (`Mark 4:3`, `1 Corinthians 13:4`)
//! - **USFM**: 3-character abbreviations (`MRK 4:3`)
//! - **UBS**: fourteen-digit positional references (`04100400300006`)
//!
//! Every parser picks the identifier kind from how much the input names:
//! a book alone gives a [`BookId`], a chapter a [`BookChapterId`], and a
//! verse a [`BookChapterVerseId`]. UBS references can also name words.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bible_ref::BookCatalog;
//! use bible_ref::parsing::{logos::parse_logos, usfm::parse_usfm};
//!
//! let catalog = BookCatalog::load_embedded().unwrap();
//! let a = parse_logos("bible.62.4", &catalog).unwrap();
//! let b = parse_usfm("MRK 4", &catalog).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! ## Chapter and Verse Tokens
//!
//! | Token   | Becomes |
//! |---------|---------|
//! | `4`     | `004`   |
//! | `119`   | `119`   |
//! | `title` | `000`   |
//!
//! Anything else is a format error.
//!
//! [`BookId`]: crate::core::reference::BookId
//! [`BookChapterId`]: crate::core::reference::BookChapterId
//! [`BookChapterVerseId`]: crate::core::reference::BookChapterVerseId

pub mod detect;
pub mod logos;
pub mod name;
pub mod osis;
pub mod ubs;
pub mod usfm;

pub use detect::{detect_notation, parse_auto};

use crate::catalog::store::BookCatalog;
use crate::core::error::RefError;
use crate::core::fields::pad3;
use crate::core::reference::{BookChapterId, BookChapterVerseId, BookId};
use crate::core::simplify::Reference;
use crate::core::types::Notation;

/// Parse `text` written in `notation`.
///
/// # Errors
///
/// Returns `RefError::Format` for malformed input and `RefError::NotFound`
/// when the book is not in the catalog.
pub fn parse(text: &str, notation: Notation, catalog: &BookCatalog) -> Result<Reference, RefError> {
    match notation {
        Notation::Canonical => Reference::from_canonical(text),
        Notation::Logos => logos::parse_logos(text, catalog),
        Notation::Osis => osis::parse_osis(text, catalog),
        Notation::Name => name::parse_name(text, catalog),
        Notation::Usfm => usfm::parse_usfm(text, catalog),
        Notation::Ubs => ubs::parse_ubs(text),
    }
}

/// Build the identifier implied by a book code and optional chapter and
/// verse tokens.
pub(crate) fn build_reference(
    book_code: &str,
    chapter: Option<&str>,
    verse: Option<&str>,
) -> Result<Reference, RefError> {
    let book = BookId::parse(book_code)?;
    let Some(chapter) = chapter else {
        return Ok(book.into());
    };
    let chapter = BookChapterId::parse(&format!("{book}{}", pad3(chapter)?))?;
    match verse {
        None => Ok(chapter.into()),
        Some(verse) => {
            let verse = BookChapterVerseId::parse(&format!("{chapter}{}", pad3(verse)?))?;
            Ok(verse.into())
        }
    }
}

/// Split `rest` into chapter and optional verse on `delimiter`.
///
/// More than one delimiter, or an empty token, is a format error.
pub(crate) fn split_chapter_verse<'a>(
    text: &str,
    rest: &'a str,
    delimiter: char,
) -> Result<(&'a str, Option<&'a str>), RefError> {
    let mut tokens = rest.split(delimiter);
    let chapter = tokens.next().unwrap_or_default();
    let verse = tokens.next();
    if tokens.next().is_some() || chapter.is_empty() || verse.is_some_and(str::is_empty) {
        return Err(RefError::format(format!(
            "Expected chapter or chapter{delimiter}verse after the book: '{text}'"
        )));
    }
    Ok((chapter, verse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Granularity;

    #[test]
    fn test_build_reference_granularity() {
        assert_eq!(
            build_reference("41", None, None).unwrap().granularity(),
            Granularity::Book
        );
        assert_eq!(
            build_reference("41", Some("4"), None).unwrap().as_str(),
            "41004"
        );
        assert_eq!(
            build_reference("41", Some("4"), Some("3")).unwrap().as_str(),
            "41004003"
        );
        assert_eq!(
            build_reference("19", Some("3"), Some("title")).unwrap().as_str(),
            "19003000"
        );
        assert!(build_reference("41", Some("four"), None).unwrap_err().is_format());
    }

    #[test]
    fn test_split_chapter_verse() {
        assert_eq!(split_chapter_verse("x", "4:3", ':').unwrap(), ("4", Some("3")));
        assert_eq!(split_chapter_verse("x", "4", ':').unwrap(), ("4", None));
        assert!(split_chapter_verse("x", "4:3:2", ':').is_err());
        assert!(split_chapter_verse("x", "4:", ':').is_err());
        assert!(split_chapter_verse("x", "", ':').is_err());
    }

    #[test]
    fn test_parse_dispatch() {
        let catalog = BookCatalog::load_embedded().unwrap();
        let expected = Reference::from_canonical("41004003").unwrap();
        for (text, notation) in [
            ("41004003", Notation::Canonical),
            ("bible.62.4.3", Notation::Logos),
            ("Mark.4.3", Notation::Osis),
            ("Mark 4:3", Notation::Name),
            ("MRK 4:3", Notation::Usfm),
            ("04100400300000", Notation::Ubs),
        ] {
            assert_eq!(parse(text, notation, &catalog).unwrap(), expected, "{text}");
        }
    }
}
