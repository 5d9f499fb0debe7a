//! Core reference types for locations in the biblical text.
//!
//! This module provides the identifier family and the operations on it:
//!
//! - [`BookId`], [`BookChapterId`], [`BookChapterVerseId`], [`WordPartId`]:
//!   fixed-width positional identifiers, each one level finer than the last
//! - [`Reference`]: any one of the four, with [`simplify`] to downcast
//! - [`ChapterRange`], [`VerseRange`]: inclusive spans within one book
//! - [`BookRecord`], [`Canon`]: catalog rows and canon orderings
//! - [`RefError`]: the error type shared by all of the above
//!
//! ## Identifier Layout
//!
//! | Kind    | Example        | Reads as         |
//! |---------|----------------|------------------|
//! | book    | `41`           | Mark             |
//! | chapter | `41004`        | Mark 4           |
//! | verse   | `41004003`     | Mark 4:3         |
//! | word    | `410040030011` | Mark 4:3, word 1 |
//!
//! Verse `000` is a chapter title. Containment is a prefix test, so `41`
//! includes every other identifier in the table.
//!
//! [`BookId`]: reference::BookId
//! [`BookChapterId`]: reference::BookChapterId
//! [`BookChapterVerseId`]: reference::BookChapterVerseId
//! [`WordPartId`]: reference::WordPartId
//! [`Reference`]: simplify::Reference
//! [`simplify`]: simplify::simplify
//! [`ChapterRange`]: range::ChapterRange
//! [`VerseRange`]: range::VerseRange
//! [`BookRecord`]: book::BookRecord
//! [`Canon`]: canon::Canon
//! [`RefError`]: error::RefError

pub mod book;
pub mod canon;
pub mod error;
pub mod fields;
pub mod range;
pub mod reference;
pub mod simplify;
pub mod types;
