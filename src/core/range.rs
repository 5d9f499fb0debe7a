//! Inclusive spans of chapters or verses within a single book.

use serde::Serialize;
use std::fmt;

use crate::catalog::chapters::ChapterMetadata;
use crate::core::error::RefError;
use crate::core::reference::{BookChapterId, BookChapterVerseId, BookId, Identifier};
use crate::core::types::LookupScheme;

fn check_endpoints<T: Identifier + PartialOrd>(start: &T, end: &T) -> Result<(), RefError> {
    if start.book_code() != end.book_code() {
        return Err(RefError::CrossBook {
            start: start.as_str().to_string(),
            end: end.as_str().to_string(),
        });
    }
    if start > end {
        return Err(RefError::Order {
            start: start.as_str().to_string(),
            end: end.as_str().to_string(),
        });
    }
    Ok(())
}

/// An inclusive span of chapters in one book, such as Mark 4-6.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ChapterRange {
    id: String,
    book: BookId,
    start: BookChapterId,
    end: BookChapterId,
}

impl ChapterRange {
    /// # Errors
    ///
    /// Returns `RefError::CrossBook` if the endpoints are in different books,
    /// or `RefError::Order` if `start` follows `end`.
    pub fn new(start: BookChapterId, end: BookChapterId) -> Result<Self, RefError> {
        check_endpoints(&start, &end)?;
        Ok(Self {
            id: format!("{start}-{end}"),
            book: start.to_book(),
            start,
            end,
        })
    }

    /// Composite id, e.g. `41004-41006`
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn book(&self) -> &BookId {
        &self.book
    }

    #[must_use]
    pub fn start(&self) -> &BookChapterId {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &BookChapterId {
        &self.end
    }

    /// Every chapter from start to end, inclusive.
    ///
    /// Chapters are assumed to be numbered without gaps.
    #[must_use]
    pub fn enumerate(&self) -> Vec<BookChapterId> {
        (self.start.chapter()..=self.end.chapter())
            .map(|chapter| BookChapterId::from_valid(self.book.as_str(), chapter))
            .collect()
    }
}

impl fmt::Display for ChapterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// An inclusive span of verses in one book, possibly crossing chapters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VerseRange {
    id: String,
    book: BookId,
    start: BookChapterVerseId,
    end: BookChapterVerseId,
}

impl VerseRange {
    /// # Errors
    ///
    /// Returns `RefError::CrossBook` if the endpoints are in different books,
    /// or `RefError::Order` if `start` follows `end`.
    pub fn new(start: BookChapterVerseId, end: BookChapterVerseId) -> Result<Self, RefError> {
        check_endpoints(&start, &end)?;
        Ok(Self {
            id: format!("{start}-{end}"),
            book: start.to_book(),
            start,
            end,
        })
    }

    /// Composite id, e.g. `41004008-41004013`
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn book(&self) -> &BookId {
        &self.book
    }

    #[must_use]
    pub fn start(&self) -> &BookChapterVerseId {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &BookChapterVerseId {
        &self.end
    }

    /// Chapter of the start verse
    #[must_use]
    pub fn chapter(&self) -> u16 {
        self.start.chapter()
    }

    /// Chapter of the end verse
    #[must_use]
    pub fn end_chapter(&self) -> u16 {
        self.end.chapter()
    }

    #[must_use]
    pub fn is_cross_chapter(&self) -> bool {
        self.chapter() != self.end_chapter()
    }

    /// Every verse from start to end, inclusive, for a single-chapter range.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotImplemented` when the range crosses chapters;
    /// use [`VerseRange::enumerate_with`] for those.
    pub fn enumerate(&self) -> Result<Vec<BookChapterVerseId>, RefError> {
        if self.is_cross_chapter() {
            return Err(RefError::NotImplemented(format!(
                "enumerating the cross-chapter range {} needs chapter metadata",
                self.id
            )));
        }
        let chapter = self.start.to_book_chapter();
        Ok((self.start.verse()..=self.end.verse())
            .map(|verse| chapter.verse(verse))
            .collect())
    }

    /// Every verse from start to end, inclusive, using `metadata` for the
    /// last verse of each chapter the range leaves.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` if `metadata` has no entry for a chapter
    /// the range passes through, or `RefError::Format` if the start verse
    /// lies past the last verse `metadata` gives its chapter.
    pub fn enumerate_with<M: ChapterMetadata + ?Sized>(
        &self,
        metadata: &M,
    ) -> Result<Vec<BookChapterVerseId>, RefError> {
        if !self.is_cross_chapter() {
            return self.enumerate();
        }

        let book = self.book.as_str();
        let mut verses = Vec::new();
        for chapter_num in self.chapter()..=self.end_chapter() {
            let chapter = BookChapterId::from_valid(book, chapter_num);
            let first = if chapter_num == self.chapter() {
                self.start.verse()
            } else {
                1
            };
            let last = if chapter_num == self.end_chapter() {
                self.end.verse()
            } else {
                metadata.last_verse_of(book, chapter_num).ok_or_else(|| {
                    RefError::not_found(LookupScheme::Chapter, chapter.as_str())
                })?
            };
            if first > last {
                return Err(RefError::format(format!(
                    "{} runs from verse {first} past the last verse {last} of chapter {}",
                    self.id,
                    chapter.as_str()
                )));
            }
            verses.extend((first..=last).map(|verse| chapter.verse(verse)));
        }
        tracing::debug!(range = %self.id, verses = verses.len(), "Enumerated cross-chapter range");
        Ok(verses)
    }
}

impl fmt::Display for VerseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
