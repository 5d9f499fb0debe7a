//! # bible-ref
//!
//! A library for identifying locations in the Bible and converting between
//! the many notations used to name them.
//!
//! The same verse can be written `Mark 4:3`, `MRK 4:3`, `Mark.4.3`,
//! `bible.62.4.3` or `04100400300000`, and the same book is numbered
//! differently by different publishers. `bible-ref` resolves all of them to
//! one fixed-width canonical identifier (`41004003`) that sorts, compares and
//! nests correctly.
//!
//! ## Features
//!
//! - **Identifier family**: book, chapter, verse and word identifiers with
//!   ordering and containment
//! - **Simplify**: reduce any identifier to a coarser level
//! - **Parsers**: Logos, OSIS, English names, USFM and UBS notations, with
//!   auto-detection
//! - **Rendering**: back into every notation, plus Logos and bible.com links
//! - **Ranges**: enumerate chapter and verse spans, across chapters when
//!   chapter metadata is available
//!
//! ## Example
//!
//! ```rust,no_run
//! use bible_ref::{BookCatalog, Granularity, Reference};
//! use bible_ref::core::simplify::simplify;
//! use bible_ref::parsing::parse_auto;
//!
//! let catalog = BookCatalog::load_embedded().unwrap();
//!
//! let verse = parse_auto("Mark 4:3", &catalog).unwrap();
//! assert_eq!(verse.as_str(), "41004003");
//!
//! let chapter = simplify(&verse, Granularity::Chapter).unwrap();
//! assert!(chapter.includes(&verse).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Book catalog storage, indexing and chapter metadata
//! - [`core`]: Identifier types, simplify, ranges and errors
//! - [`parsing`]: Parsers for each external notation
//! - [`render`]: Rendering to notations and link URIs
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod render;

// Re-export commonly used types for convenience
pub use catalog::chapters::{ChapterMetadata, ChapterVerseTable};
pub use catalog::store::{BookCatalog, CatalogError};
pub use core::book::BookRecord;
pub use core::canon::Canon;
pub use core::error::RefError;
pub use core::range::{ChapterRange, VerseRange};
pub use core::reference::{BookChapterId, BookChapterVerseId, BookId, Identifier, WordPartId};
pub use core::simplify::Reference;
pub use core::types::*;
