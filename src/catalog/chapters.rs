use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::catalog::store::CatalogError;

/// Chapter table version for compatibility checking
pub const CHAPTER_TABLE_VERSION: &str = "1.0.0";

/// Source of "how many verses does this chapter have"
pub trait ChapterMetadata {
    /// Last verse number of `chapter` in the book with `book_code`
    fn last_verse_of(&self, book_code: &str, chapter: u16) -> Option<u16>;
}

/// Serializable chapter table format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterTableData {
    pub version: String,
    /// Book code -> last verse of each chapter, chapter 1 first
    pub chapters: BTreeMap<String, Vec<u16>>,
}

/// Last-verse numbers per chapter, keyed by book code
#[derive(Debug, Clone, Default)]
pub struct ChapterVerseTable {
    chapters: BTreeMap<String, Vec<u16>>,
}

impl ChapterVerseTable {
    /// Load the embedded sample table
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded data is malformed.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        const EMBEDDED_TABLE: &str = include_str!("../../catalogs/chapter_verses.json");
        Self::from_json(EMBEDDED_TABLE)
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a table from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: ChapterTableData = serde_json::from_str(json)?;
        if data.version != CHAPTER_TABLE_VERSION {
            tracing::warn!(
                expected = CHAPTER_TABLE_VERSION,
                found = %data.version,
                "Chapter table version mismatch"
            );
        }
        tracing::debug!(books = data.chapters.len(), "Loaded chapter table");
        Ok(Self {
            chapters: data.chapters,
        })
    }

    /// Replace the chapter list for one book
    pub fn insert(&mut self, book_code: impl Into<String>, last_verses: Vec<u16>) {
        self.chapters.insert(book_code.into(), last_verses);
    }

    /// Number of chapters recorded for a book
    #[must_use]
    pub fn last_chapter_of(&self, book_code: &str) -> Option<u16> {
        let count = self.chapters.get(book_code)?.len();
        u16::try_from(count).ok().filter(|&n| n > 0)
    }
}

impl ChapterMetadata for ChapterVerseTable {
    fn last_verse_of(&self, book_code: &str, chapter: u16) -> Option<u16> {
        let index = usize::from(chapter).checked_sub(1)?;
        self.chapters.get(book_code)?.get(index).copied()
    }
}
