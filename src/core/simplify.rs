//! The `Reference` tagged union and the downcast between granularities.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::store::BookCatalog;
use crate::core::error::RefError;
use crate::core::reference::{
    BookChapterId, BookChapterVerseId, BookId, Identifier, WordPartId,
};
use crate::core::types::{CanonPrefix, Granularity};

/// Any identifier in the book/chapter/verse/word family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    Book(BookId),
    Chapter(BookChapterId),
    Verse(BookChapterVerseId),
    Word(WordPartId),
}

impl Reference {
    /// Parse a canonical identifier, choosing the kind from its width.
    ///
    /// Widths 2, 5 and 8 give book, chapter and verse identifiers; 11 or 12
    /// characters, or a string starting with a canon prefix, give a word.
    ///
    /// # Errors
    ///
    /// Returns `RefError::Format` for any other width or malformed fields.
    pub fn from_canonical(text: &str) -> Result<Self, RefError> {
        let prefixed = text
            .chars()
            .next()
            .is_some_and(|c| CanonPrefix::from_char(c).is_some());
        if prefixed {
            return WordPartId::parse(text).map(Self::Word);
        }
        match text.len() {
            2 => BookId::parse(text).map(Self::Book),
            5 => BookChapterId::parse(text).map(Self::Chapter),
            8 => BookChapterVerseId::parse(text).map(Self::Verse),
            11 | 12 => WordPartId::parse(text).map(Self::Word),
            _ => Err(RefError::format(format!(
                "Not a canonical identifier (expected 2, 5, 8, 11 or 12 characters): '{text}'"
            ))),
        }
    }

    #[must_use]
    pub fn granularity(&self) -> Granularity {
        match self {
            Self::Book(_) => Granularity::Book,
            Self::Chapter(_) => Granularity::Chapter,
            Self::Verse(_) => Granularity::Verse,
            Self::Word(_) => Granularity::WordPart,
        }
    }

    /// The canonical positional string
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Book(id) => id.as_str(),
            Self::Chapter(id) => id.as_str(),
            Self::Verse(id) => id.as_str(),
            Self::Word(id) => id.as_str(),
        }
    }

    #[must_use]
    pub fn book_code(&self) -> &str {
        match self {
            Self::Book(id) => id.book_code(),
            Self::Chapter(id) => id.book_code(),
            Self::Verse(id) => id.book_code(),
            Self::Word(id) => id.book_code(),
        }
    }

    /// Chapter number, if this reference names one
    #[must_use]
    pub fn chapter(&self) -> Option<u16> {
        match self {
            Self::Book(_) => None,
            Self::Chapter(id) => Some(id.chapter()),
            Self::Verse(id) => Some(id.chapter()),
            Self::Word(id) => Some(id.chapter()),
        }
    }

    /// Verse number, if this reference names one
    #[must_use]
    pub fn verse(&self) -> Option<u16> {
        match self {
            Self::Book(_) | Self::Chapter(_) => None,
            Self::Verse(id) => Some(id.verse()),
            Self::Word(id) => Some(id.verse()),
        }
    }

    /// Containment across kinds: `other` must be the same kind or finer.
    ///
    /// # Errors
    ///
    /// Returns `RefError::IncompatibleKind` if `other` is coarser than `self`.
    pub fn includes(&self, other: &Reference) -> Result<bool, RefError> {
        match self {
            Self::Book(id) => other.included_by(id),
            Self::Chapter(id) => other.included_by(id),
            Self::Verse(id) => other.included_by(id),
            Self::Word(id) => other.included_by(id),
        }
    }

    fn included_by<T: Identifier>(&self, outer: &T) -> Result<bool, RefError> {
        match self {
            Self::Book(id) => outer.includes(id),
            Self::Chapter(id) => outer.includes(id),
            Self::Verse(id) => outer.includes(id),
            Self::Word(id) => outer.includes(id),
        }
    }

    /// Render as USFM (`MRK`, `MRK 4`, `MRK 4:3`).
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` if the book code is not in the catalog.
    pub fn to_usfm(&self, catalog: &BookCatalog) -> Result<String, RefError> {
        match self {
            Self::Book(id) => id.to_usfm(catalog),
            Self::Chapter(id) => id.to_usfm(catalog),
            Self::Verse(id) => id.to_usfm(catalog),
            Self::Word(id) => id.to_usfm(catalog),
        }
    }
}

/// Ordering is only defined between references of the same kind.
impl PartialOrd for Reference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Book(a), Self::Book(b)) => a.partial_cmp(b),
            (Self::Chapter(a), Self::Chapter(b)) => a.partial_cmp(b),
            (Self::Verse(a), Self::Verse(b)) => a.partial_cmp(b),
            (Self::Word(a), Self::Word(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Reference {
    type Err = RefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(s)
    }
}

impl Serialize for Reference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_canonical(&s).map_err(serde::de::Error::custom)
    }
}

impl From<BookId> for Reference {
    fn from(id: BookId) -> Self {
        Self::Book(id)
    }
}

impl From<BookChapterId> for Reference {
    fn from(id: BookChapterId) -> Self {
        Self::Chapter(id)
    }
}

impl From<BookChapterVerseId> for Reference {
    fn from(id: BookChapterVerseId) -> Self {
        Self::Verse(id)
    }
}

impl From<WordPartId> for Reference {
    fn from(id: WordPartId) -> Self {
        Self::Word(id)
    }
}

/// Downcast `reference` to the coarser `target` granularity.
///
/// A target equal to the source granularity returns a copy. Word
/// identifiers are reduced through their own accessors so the canon prefix
/// never leaks into the result.
///
/// # Errors
///
/// Returns `RefError::IncompatibleKind` if `target` is finer than the source,
/// or if `target` is the word-part granularity.
pub fn simplify(reference: &Reference, target: Granularity) -> Result<Reference, RefError> {
    if target == Granularity::WordPart {
        return Err(RefError::IncompatibleKind(format!(
            "cannot simplify {reference} into a word identifier"
        )));
    }
    if target > reference.granularity() {
        return Err(RefError::IncompatibleKind(format!(
            "cannot simplify the {} identifier {reference} to the finer {target} granularity",
            reference.granularity()
        )));
    }

    let simplified = match (reference, target) {
        (Reference::Word(id), Granularity::Verse) => id.to_book_chapter_verse().into(),
        (Reference::Word(id), Granularity::Chapter) => id.to_book_chapter().into(),
        (Reference::Word(id), Granularity::Book) => id.to_book().into(),
        (Reference::Verse(id), Granularity::Verse) => id.clone().into(),
        (Reference::Verse(id), Granularity::Chapter) => id.to_book_chapter().into(),
        (Reference::Verse(id), Granularity::Book) => id.to_book().into(),
        (Reference::Chapter(id), Granularity::Chapter) => id.clone().into(),
        (Reference::Chapter(id), Granularity::Book) => id.to_book().into(),
        (Reference::Book(id), Granularity::Book) => id.clone().into(),
        // finer targets were rejected above
        _ => {
            return Err(RefError::IncompatibleKind(format!(
                "cannot simplify {reference} to {target}"
            )))
        }
    };
    Ok(simplified)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(text: &str) -> Reference {
        Reference::from_canonical(text).unwrap()
    }

    #[test]
    fn test_from_canonical_dispatch() {
        assert_eq!(r("41").granularity(), Granularity::Book);
        assert_eq!(r("41004").granularity(), Granularity::Chapter);
        assert_eq!(r("41004003").granularity(), Granularity::Verse);
        assert_eq!(r("41004003001").granularity(), Granularity::WordPart);
        assert_eq!(r("410040030012").granularity(), Granularity::WordPart);
        assert_eq!(r("n410040030012").as_str(), "410040030012");
        assert!(Reference::from_canonical("4100").unwrap_err().is_format());
        assert!(Reference::from_canonical("").unwrap_err().is_format());
    }

    #[test]
    fn test_simplify_word() {
        let word = r("410040080011");
        assert_eq!(simplify(&word, Granularity::Verse).unwrap(), r("41004008"));
        assert_eq!(simplify(&word, Granularity::Chapter).unwrap(), r("41004"));
        assert_eq!(simplify(&word, Granularity::Book).unwrap(), r("41"));
    }

    #[test]
    fn test_simplify_prefixed_word() {
        let word = r("o010020030011");
        assert_eq!(simplify(&word, Granularity::Verse).unwrap(), r("01002003"));
        assert_eq!(simplify(&word, Granularity::Book).unwrap(), r("01"));
    }

    #[test]
    fn test_simplify_same_granularity_copies() {
        let verse = r("41004008");
        assert_eq!(simplify(&verse, Granularity::Verse).unwrap(), verse);
        let book = r("41");
        assert_eq!(simplify(&book, Granularity::Book).unwrap(), book);
    }

    #[test]
    fn test_simplify_rejects_finer_targets() {
        let chapter = r("41004");
        let err = simplify(&chapter, Granularity::Verse).unwrap_err();
        assert!(matches!(err, RefError::IncompatibleKind(_)));

        let word = r("410040080011");
        assert!(simplify(&word, Granularity::WordPart).is_err());
        assert!(simplify(&r("41"), Granularity::Chapter).is_err());
    }

    #[test]
    fn test_simplified_book_includes_word() {
        let word = r("410040080023");
        let book = simplify(&word, Granularity::Book).unwrap();
        assert!(book.includes(&word).unwrap());
    }

    #[test]
    fn test_cross_kind_includes() {
        assert!(r("41").includes(&r("41004003")).unwrap());
        assert!(r("41004").includes(&r("410040030011")).unwrap());
        assert!(!r("41005").includes(&r("41004003")).unwrap());
        assert!(r("41004003").includes(&r("41")).is_err());
    }

    #[test]
    fn test_partial_ord_same_kind_only() {
        assert!(r("41004") < r("41005"));
        assert!(r("40028") < r("41001"));
        assert_eq!(r("41").partial_cmp(&r("41004")), None);
    }

    #[test]
    fn test_accessors() {
        let word = r("410040080011");
        assert_eq!(word.book_code(), "41");
        assert_eq!(word.chapter(), Some(4));
        assert_eq!(word.verse(), Some(8));
        assert_eq!(r("41").chapter(), None);
        assert_eq!(r("41004").verse(), None);
    }

    #[test]
    fn test_serde_as_string() {
        let chapter = r("41004");
        assert_eq!(serde_json::to_string(&chapter).unwrap(), "\"41004\"");
        let back: Reference = serde_json::from_str("\"41004\"").unwrap();
        assert_eq!(back, chapter);
    }
}
