//! Book catalog and chapter metadata.
//!
//! The book catalog maps every supported book key (ordinal, code, USFM
//! abbreviation, OSIS id, English name, legacy alternate code) onto one
//! [`BookRecord`](crate::core::book::BookRecord). An embedded catalog is
//! compiled into the binary, but custom catalogs can also be loaded from JSON
//! files.
//!
//! ## Embedded Data
//!
//! - **books.json**: the 66 Protestant books plus the deuterocanon
//! - **chapter_verses.json**: last verse of each chapter for a sample of books
//!
//! ## Example
//!
//! ```rust,no_run
//! use bible_ref::BookCatalog;
//!
//! let catalog = BookCatalog::load_embedded().unwrap();
//! let mark = catalog.lookup_by_ordinal(62).unwrap();
//! assert_eq!(mark.abbreviation, "MRK");
//!
//! // Export, edit, reload
//! let json = catalog.to_json().unwrap();
//! let custom = BookCatalog::from_json(&json).unwrap();
//! ```

pub mod chapters;
pub mod store;
