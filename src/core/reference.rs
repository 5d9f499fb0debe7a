//! The four identifier types: book, chapter, verse and word-part.
//!
//! Each identifier is an immutable, fixed-width, zero-padded string. Equality
//! and ordering follow the canonical string, which for fixed-width fields is
//! the same as numeric order within a single identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::store::BookCatalog;
use crate::core::error::RefError;
use crate::core::fields::{self, DEFAULT_PART};
use crate::core::types::{CanonPrefix, Granularity};

/// Behavior shared by every identifier type.
pub trait Identifier {
    /// Hierarchy level named by this identifier type
    const GRANULARITY: Granularity;

    /// The canonical positional string
    fn as_str(&self) -> &str;

    /// The 2-character book code
    fn book_code(&self) -> &str {
        &self.as_str()[fields::BOOK]
    }

    /// Return true if `other` falls within the scope of `self`.
    ///
    /// Containment is a prefix test on canonical strings, so every
    /// identifier includes itself.
    ///
    /// # Errors
    ///
    /// Returns `RefError::IncompatibleKind` if `other` is coarser than `self`.
    fn includes<T: Identifier>(&self, other: &T) -> Result<bool, RefError> {
        if T::GRANULARITY < Self::GRANULARITY {
            return Err(RefError::IncompatibleKind(format!(
                "a {} identifier cannot include the coarser {} identifier {}",
                Self::GRANULARITY,
                T::GRANULARITY,
                other.as_str()
            )));
        }
        Ok(other.as_str().starts_with(self.as_str()))
    }
}

/// Display, parsing and serde as the canonical string.
macro_rules! impl_identifier {
    ($name:ident, $granularity:expr) => {
        impl Identifier for $name {
            const GRANULARITY: Granularity = $granularity;

            fn as_str(&self) -> &str {
                &self.id
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.id)
            }
        }

        impl FromStr for $name {
            type Err = RefError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.id)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A book, as a 2-character code like `41` (Mark).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId {
    id: String,
}

impl BookId {
    /// Parse a 2-character book identifier.
    ///
    /// # Errors
    ///
    /// Returns `RefError::Format` if the text is not a 2-character book code.
    pub fn parse(text: &str) -> Result<Self, RefError> {
        fields::check_width("Book ID", text, Granularity::Book.width())?;
        fields::check_book_code(text)?;
        Ok(Self {
            id: text.to_string(),
        })
    }

    /// Render as a USFM abbreviation such as `MRK`.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` if the catalog has no book with this code.
    pub fn to_usfm(&self, catalog: &BookCatalog) -> Result<String, RefError> {
        Ok(catalog.lookup_by_code(&self.id)?.abbreviation.clone())
    }
}

impl_identifier!(BookId, Granularity::Book);

/// A chapter, as `BBCCC` like `41004` (Mark 4).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookChapterId {
    id: String,
    chapter: u16,
}

impl BookChapterId {
    /// Parse a 5-character book+chapter identifier.
    ///
    /// # Errors
    ///
    /// Returns `RefError::Format` for the wrong width or a non-numeric chapter.
    pub fn parse(text: &str) -> Result<Self, RefError> {
        fields::check_width("Chapter ID", text, Granularity::Chapter.width())?;
        fields::check_book_code(&text[fields::BOOK])?;
        let chapter = fields::parse_field("Chapter", &text[fields::CHAPTER])?;
        Ok(Self {
            id: text.to_string(),
            chapter,
        })
    }

    /// Build a chapter identifier from a book and chapter number.
    ///
    /// # Errors
    ///
    /// Returns `RefError::Format` if the chapter does not fit in 3 digits.
    pub fn from_parts(book: &BookId, chapter: u16) -> Result<Self, RefError> {
        if chapter > fields::MAX_FIELD_VALUE {
            return Err(RefError::format(format!(
                "Chapter {chapter} does not fit in 3 digits"
            )));
        }
        Ok(Self::from_valid(book.as_str(), chapter))
    }

    /// Caller guarantees a valid book code and a chapter below 1000.
    pub(crate) fn from_valid(book_code: &str, chapter: u16) -> Self {
        Self {
            id: format!("{book_code}{}", fields::pad(chapter, 3)),
            chapter,
        }
    }

    #[must_use]
    pub fn chapter_code(&self) -> &str {
        &self.id[fields::CHAPTER]
    }

    #[must_use]
    pub fn chapter(&self) -> u16 {
        self.chapter
    }

    #[must_use]
    pub fn to_book(&self) -> BookId {
        BookId {
            id: self.id[fields::BOOK].to_string(),
        }
    }

    /// Verse `verse` of this chapter; the verse must be below 1000.
    pub(crate) fn verse(&self, verse: u16) -> BookChapterVerseId {
        BookChapterVerseId {
            id: format!("{}{}", self.id, fields::pad(verse, 3)),
            chapter: self.chapter,
            verse,
        }
    }

    /// Render as USFM, e.g. `MRK 4`.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` if the catalog has no book with this code.
    pub fn to_usfm(&self, catalog: &BookCatalog) -> Result<String, RefError> {
        let book = catalog.lookup_by_code(self.book_code())?;
        Ok(format!("{} {}", book.abbreviation, self.chapter))
    }
}

impl_identifier!(BookChapterId, Granularity::Chapter);

/// A verse, as `BBCCCVVV` like `41004003` (Mark 4:3).
///
/// Verse `000` is a chapter title or superscription.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookChapterVerseId {
    id: String,
    chapter: u16,
    verse: u16,
}

impl BookChapterVerseId {
    /// Parse an 8-character book+chapter+verse identifier.
    ///
    /// # Errors
    ///
    /// Returns `RefError::Format` for the wrong width or non-numeric fields.
    pub fn parse(text: &str) -> Result<Self, RefError> {
        fields::check_width("Verse ID", text, Granularity::Verse.width())?;
        fields::check_book_code(&text[fields::BOOK])?;
        let chapter = fields::parse_field("Chapter", &text[fields::CHAPTER])?;
        let verse = fields::parse_field("Verse", &text[fields::VERSE])?;
        Ok(Self {
            id: text.to_string(),
            chapter,
            verse,
        })
    }

    #[must_use]
    pub fn chapter_code(&self) -> &str {
        &self.id[fields::CHAPTER]
    }

    #[must_use]
    pub fn verse_code(&self) -> &str {
        &self.id[fields::VERSE]
    }

    #[must_use]
    pub fn chapter(&self) -> u16 {
        self.chapter
    }

    #[must_use]
    pub fn verse(&self) -> u16 {
        self.verse
    }

    #[must_use]
    pub fn to_book(&self) -> BookId {
        BookId {
            id: self.id[fields::BOOK].to_string(),
        }
    }

    #[must_use]
    pub fn to_book_chapter(&self) -> BookChapterId {
        BookChapterId {
            id: self.id[..Granularity::Chapter.width()].to_string(),
            chapter: self.chapter,
        }
    }

    /// Render as USFM, e.g. `MRK 4:3`.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` if the catalog has no book with this code.
    pub fn to_usfm(&self, catalog: &BookCatalog) -> Result<String, RefError> {
        let book = catalog.lookup_by_code(self.book_code())?;
        Ok(format!(
            "{} {}:{}",
            book.abbreviation, self.chapter, self.verse
        ))
    }
}

impl_identifier!(BookChapterVerseId, Granularity::Verse);

/// A word or word part, as `BBCCCVVVWWWP` like `410040030011`.
///
/// Input may omit the part (11 digits), in which case it defaults to `1`, and
/// may carry a leading canon prefix (`o`, `n` or `x`). The canonical string
/// always has all 12 digits and never the prefix; the prefix is derived from
/// the book code and checked against any prefix given in the input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordPartId {
    id: String,
    canon: CanonPrefix,
    chapter: u16,
    verse: u16,
    word: u16,
    part: char,
}

impl WordPartId {
    /// Parse an 11- or 12-digit word identifier with an optional canon prefix.
    ///
    /// # Errors
    ///
    /// Returns `RefError::Format` for the wrong width, non-numeric fields, or a
    /// canon prefix that disagrees with the book code.
    pub fn parse(text: &str) -> Result<Self, RefError> {
        if !text.is_ascii() {
            return Err(RefError::format(format!(
                "Word ID must be ASCII: '{text}'"
            )));
        }
        let (given_prefix, digits) = match text.chars().next().and_then(CanonPrefix::from_char) {
            Some(prefix) => (Some(prefix), &text[1..]),
            None => (None, text),
        };

        let width = Granularity::WordPart.width();
        if digits.len() != width && digits.len() != width - 1 {
            return Err(RefError::format(format!(
                "Word ID must be {} or {width} characters after any canon prefix: '{text}'",
                width - 1
            )));
        }

        let book = &digits[fields::BOOK];
        fields::check_book_code(book)?;
        let chapter = fields::parse_field("Chapter", &digits[fields::CHAPTER])?;
        let verse = fields::parse_field("Verse", &digits[fields::VERSE])?;
        let word = fields::parse_field("Word", &digits[fields::WORD])?;

        let canon = fields::canon_prefix_for(book);
        if let Some(prefix) = given_prefix {
            if prefix != canon {
                return Err(RefError::format(format!(
                    "Canon prefix '{prefix}' does not match book {book} (expected '{canon}'): '{text}'"
                )));
            }
        }

        let part = match digits.get(fields::PART) {
            Some(p) => {
                fields::parse_field("Part", p)?;
                p.chars().next().unwrap_or(DEFAULT_PART)
            }
            None => DEFAULT_PART,
        };

        Ok(Self {
            id: format!("{}{part}", &digits[..fields::PART.start]),
            canon,
            chapter,
            verse,
            word,
            part,
        })
    }

    /// Serialize with or without the canon prefix and part.
    ///
    /// # Errors
    ///
    /// Returns `RefError::LossyConversion` when asked to omit a part other
    /// than the default `1`.
    pub fn get_id(&self, include_canon_prefix: bool, include_part: bool) -> Result<String, RefError> {
        if !include_part && self.part != DEFAULT_PART {
            return Err(RefError::LossyConversion {
                id: self.id.clone(),
                part: self.part,
            });
        }
        let body = if include_part {
            &self.id[..]
        } else {
            &self.id[..fields::PART.start]
        };
        if include_canon_prefix {
            Ok(format!("{}{body}", self.canon))
        } else {
            Ok(body.to_string())
        }
    }

    #[must_use]
    pub fn canon_prefix(&self) -> CanonPrefix {
        self.canon
    }

    #[must_use]
    pub fn chapter_code(&self) -> &str {
        &self.id[fields::CHAPTER]
    }

    #[must_use]
    pub fn verse_code(&self) -> &str {
        &self.id[fields::VERSE]
    }

    #[must_use]
    pub fn word_code(&self) -> &str {
        &self.id[fields::WORD]
    }

    #[must_use]
    pub fn chapter(&self) -> u16 {
        self.chapter
    }

    #[must_use]
    pub fn verse(&self) -> u16 {
        self.verse
    }

    #[must_use]
    pub fn word(&self) -> u16 {
        self.word
    }

    #[must_use]
    pub fn part(&self) -> char {
        self.part
    }

    #[must_use]
    pub fn to_book(&self) -> BookId {
        BookId {
            id: self.id[fields::BOOK].to_string(),
        }
    }

    #[must_use]
    pub fn to_book_chapter(&self) -> BookChapterId {
        BookChapterId {
            id: self.id[..Granularity::Chapter.width()].to_string(),
            chapter: self.chapter,
        }
    }

    #[must_use]
    pub fn to_book_chapter_verse(&self) -> BookChapterVerseId {
        BookChapterVerseId {
            id: self.id[..Granularity::Verse.width()].to_string(),
            chapter: self.chapter,
            verse: self.verse,
        }
    }

    /// Render the containing verse as USFM; word and part are dropped.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` if the catalog has no book with this code.
    pub fn to_usfm(&self, catalog: &BookCatalog) -> Result<String, RefError> {
        self.to_book_chapter_verse().to_usfm(catalog)
    }
}

impl_identifier!(WordPartId, Granularity::WordPart);
