use crate::catalog::store::BookCatalog;
use crate::core::error::RefError;
use crate::core::range::VerseRange;
use crate::core::reference::Identifier;
use crate::core::simplify::Reference;
use crate::core::types::{LookupScheme, Notation};
use crate::render::render;

pub const LOGOS_URI_BASE: &str = "https://ref.ly/logosref/";
pub const BIBLIA_URI_BASE: &str = "https://biblia.com/books/nrsv/";
pub const BIBLE_COM_BASE: &str = "https://bible.com/bible";

/// bible.com edition ids by abbreviation
pub const EDITIONS: [(&str, u32); 6] = [
    ("ESV", 59),
    ("NIRV", 110),
    ("NIV", 111),
    ("NLT", 116),
    ("NASB2020", 2692),
    ("BSB", 3034),
];

pub const DEFAULT_EDITION: &str = "NIV";

/// Link into Logos for any reference, e.g.
/// `https://ref.ly/logosref/bible.62.4.3`.
///
/// # Errors
///
/// Returns `RefError::NotFound` if the book is not in the catalog.
pub fn logos_uri(reference: &Reference, catalog: &BookCatalog) -> Result<String, RefError> {
    let logos = render(reference, Notation::Logos, catalog)?;
    Ok(format!("{LOGOS_URI_BASE}{logos}"))
}

/// Link to the book of any reference at biblia.com, e.g.
/// `https://biblia.com/books/nrsv/Mk`. Chapters and verses link to their book.
///
/// # Errors
///
/// Returns `RefError::NotFound` if the book is not in the catalog or has no
/// Biblia abbreviation.
pub fn biblia_uri(reference: &Reference, catalog: &BookCatalog) -> Result<String, RefError> {
    let book = catalog.lookup_by_code(reference.book_code())?;
    let biblia = book
        .biblia
        .as_deref()
        .ok_or_else(|| RefError::not_found(LookupScheme::Biblia, &book.code))?;
    Ok(format!("{BIBLIA_URI_BASE}{biblia}"))
}

/// Builds bible.com links for one edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibleComLinker {
    edition: String,
    edition_id: u32,
}

impl BibleComLinker {
    /// # Errors
    ///
    /// Returns `RefError::NotFound` for an edition not in [`EDITIONS`].
    pub fn new(edition: &str) -> Result<Self, RefError> {
        let upper = edition.to_ascii_uppercase();
        EDITIONS
            .iter()
            .find(|(name, _)| *name == upper)
            .map(|&(name, edition_id)| Self {
                edition: name.to_string(),
                edition_id,
            })
            .ok_or_else(|| RefError::not_found(LookupScheme::Edition, edition))
    }

    #[must_use]
    pub fn edition(&self) -> &str {
        &self.edition
    }

    #[must_use]
    pub fn edition_id(&self) -> u32 {
        self.edition_id
    }

    fn base(&self, catalog: &BookCatalog, book_code: &str) -> Result<String, RefError> {
        let book = catalog.lookup_by_code(book_code)?;
        Ok(format!(
            "{BIBLE_COM_BASE}/{}/{}",
            self.edition_id, book.abbreviation
        ))
    }

    /// Link to a chapter or verse: `https://bible.com/bible/111/MRK.4.3`.
    ///
    /// Word references link to their verse.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotImplemented` for book references and
    /// `RefError::NotFound` if the book is not in the catalog.
    pub fn uri(&self, reference: &Reference, catalog: &BookCatalog) -> Result<String, RefError> {
        let Some(chapter) = reference.chapter() else {
            return Err(RefError::NotImplemented(format!(
                "bible.com has no page for the whole book {reference}"
            )));
        };
        let mut out = format!("{}.{chapter}", self.base(catalog, reference.book_code())?);
        if let Some(verse) = reference.verse() {
            out.push_str(&format!(".{verse}"));
        }
        Ok(out)
    }

    /// Link to a verse range within one chapter:
    /// `https://bible.com/bible/111/MRK.4.3-9`.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotImplemented` for cross-chapter ranges and
    /// `RefError::NotFound` if the book is not in the catalog.
    pub fn range_uri(&self, range: &VerseRange, catalog: &BookCatalog) -> Result<String, RefError> {
        if range.is_cross_chapter() {
            return Err(RefError::NotImplemented(format!(
                "bible.com links for the cross-chapter range {range}"
            )));
        }
        Ok(format!(
            "{}.{}.{}-{}",
            self.base(catalog, range.book().as_str())?,
            range.chapter(),
            range.start().verse(),
            range.end().verse()
        ))
    }
}

impl Default for BibleComLinker {
    fn default() -> Self {
        Self {
            edition: DEFAULT_EDITION.to_string(),
            edition_id: 111,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference::BookChapterVerseId;

    fn catalog() -> BookCatalog {
        BookCatalog::load_embedded().unwrap()
    }

    fn r(text: &str) -> Reference {
        Reference::from_canonical(text).unwrap()
    }

    #[test]
    fn test_logos_uri() {
        let catalog = catalog();
        assert_eq!(
            logos_uri(&r("41"), &catalog).unwrap(),
            "https://ref.ly/logosref/bible.62"
        );
        assert_eq!(
            logos_uri(&r("41004003"), &catalog).unwrap(),
            "https://ref.ly/logosref/bible.62.4.3"
        );
    }

    #[test]
    fn test_biblia_uri() {
        let catalog = catalog();
        assert_eq!(
            biblia_uri(&r("01"), &catalog).unwrap(),
            "https://biblia.com/books/nrsv/Ge"
        );
        assert_eq!(
            biblia_uri(&r("41004003"), &catalog).unwrap(),
            "https://biblia.com/books/nrsv/Mk"
        );

        let mut bare = BookCatalog::new();
        bare.add_book(crate::core::book::BookRecord::new(62, "41", "MRK", "Mark", "Mark"))
            .unwrap();
        let err = biblia_uri(&r("41"), &bare).unwrap_err();
        assert_eq!(
            err,
            RefError::NotFound {
                scheme: LookupScheme::Biblia,
                key: "41".to_string()
            }
        );
    }

    #[test]
    fn test_bible_com_uri() {
        let catalog = catalog();
        let linker = BibleComLinker::default();
        assert_eq!(linker.edition(), "NIV");
        assert_eq!(
            linker.uri(&r("41004003"), &catalog).unwrap(),
            "https://bible.com/bible/111/MRK.4.3"
        );
        assert_eq!(
            linker.uri(&r("41004"), &catalog).unwrap(),
            "https://bible.com/bible/111/MRK.4"
        );
        assert_eq!(
            linker.uri(&r("410040030021"), &catalog).unwrap(),
            "https://bible.com/bible/111/MRK.4.3"
        );
        let err = linker.uri(&r("41"), &catalog).unwrap_err();
        assert!(matches!(err, RefError::NotImplemented(_)));
    }

    #[test]
    fn test_editions() {
        let esv = BibleComLinker::new("esv").unwrap();
        assert_eq!(esv.edition(), "ESV");
        assert_eq!(esv.edition_id(), 59);
        assert_eq!(BibleComLinker::new("BSB").unwrap().edition_id(), 3034);
        assert_eq!(
            BibleComLinker::new(DEFAULT_EDITION).unwrap(),
            BibleComLinker::default()
        );
        assert!(BibleComLinker::new("KJV").unwrap_err().is_not_found());
    }

    #[test]
    fn test_range_uri() {
        let catalog = catalog();
        let linker = BibleComLinker::default();
        let range = VerseRange::new(
            BookChapterVerseId::parse("41004003").unwrap(),
            BookChapterVerseId::parse("41004009").unwrap(),
        )
        .unwrap();
        assert_eq!(
            linker.range_uri(&range, &catalog).unwrap(),
            "https://bible.com/bible/111/MRK.4.3-9"
        );

        let cross = VerseRange::new(
            BookChapterVerseId::parse("41004040").unwrap(),
            BookChapterVerseId::parse("41005002").unwrap(),
        )
        .unwrap();
        assert!(matches!(
            linker.range_uri(&cross, &catalog).unwrap_err(),
            RefError::NotImplemented(_)
        ));
    }
}
