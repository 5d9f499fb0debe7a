use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

use crate::core::book::BookRecord;
use crate::core::canon::Canon;
use crate::core::error::RefError;
use crate::core::fields;
use crate::core::types::LookupScheme;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to build book name matcher: {0}")]
    Matcher(#[from] regex::Error),

    #[error("Duplicate {scheme} '{key}' in catalog")]
    Duplicate { scheme: LookupScheme, key: String },
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    /// Close spellings mapped to the catalog name ("Psalm" -> "Psalms")
    #[serde(default)]
    pub name_variants: BTreeMap<String, String>,
    pub books: Vec<BookRecord>,
}

/// Finds the longest known book name at the start of a string.
#[derive(Debug, Clone, Default)]
pub struct NameMatcher {
    regex: Option<Regex>,
}

impl NameMatcher {
    /// Build a matcher over `names`.
    ///
    /// # Errors
    ///
    /// Returns a regex error if the combined pattern cannot be compiled.
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self, regex::Error> {
        let mut names: Vec<&str> = names.into_iter().filter(|n| !n.is_empty()).collect();
        if names.is_empty() {
            return Ok(Self { regex: None });
        }
        // Alternation is leftmost-first, so longer names must come first
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names.dedup();

        let alternatives: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
        let pattern = format!("^(?:{})", alternatives.join("|"));
        Ok(Self {
            regex: Some(Regex::new(&pattern)?),
        })
    }

    /// The longest known name that `text` starts with, if any.
    #[must_use]
    pub fn find_longest<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.as_ref()?.find(text).map(|m| m.as_str())
    }
}

/// The book catalog with one index per lookup scheme
#[derive(Debug)]
pub struct BookCatalog {
    books: Vec<BookRecord>,

    name_variants: BTreeMap<String, String>,

    /// Index: ordinal -> index in books vec
    ordinal_to_index: HashMap<u16, usize>,

    /// Index: canonical code -> index
    code_to_index: HashMap<String, usize>,

    /// Index: USFM abbreviation -> index
    abbreviation_to_index: HashMap<String, usize>,

    /// Index: OSIS id -> index
    osis_to_index: HashMap<String, usize>,

    /// Index: name and alt name -> index
    name_to_index: HashMap<String, usize>,

    /// Index: legacy alternate code -> index
    alternate_to_index: HashMap<String, usize>,

    /// Index: biblia.com abbreviation -> index
    biblia_to_index: HashMap<String, usize>,

    matcher: NameMatcher,
}

impl BookCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            name_variants: BTreeMap::new(),
            ordinal_to_index: HashMap::new(),
            code_to_index: HashMap::new(),
            abbreviation_to_index: HashMap::new(),
            osis_to_index: HashMap::new(),
            name_to_index: HashMap::new(),
            alternate_to_index: HashMap::new(),
            biblia_to_index: HashMap::new(),
            matcher: NameMatcher::default(),
        }
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded data is inconsistent.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, structure checked by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/books.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or duplicate keys.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "Book catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        catalog.name_variants = data.name_variants;
        for book in data.books {
            catalog.index_book(book)?;
        }
        catalog.rebuild_matcher()?;

        tracing::debug!(books = catalog.len(), "Loaded book catalog");
        Ok(catalog)
    }

    /// Add a book to the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Duplicate` if any of the book's keys (ordinal,
    /// code, abbreviation, OSIS id, names, alternate code or Biblia
    /// abbreviation) is already taken; the catalog is left unchanged.
    pub fn add_book(&mut self, book: BookRecord) -> Result<(), CatalogError> {
        self.index_book(book)?;
        self.rebuild_matcher()
    }

    /// Map a close spelling onto a catalog name
    ///
    /// # Errors
    ///
    /// Returns an error if the name matcher cannot be rebuilt.
    pub fn add_name_variant(
        &mut self,
        variant: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), CatalogError> {
        self.name_variants.insert(variant.into(), name.into());
        self.rebuild_matcher()
    }

    fn index_book(&mut self, book: BookRecord) -> Result<(), CatalogError> {
        let duplicate = |scheme: LookupScheme, key: &str| CatalogError::Duplicate {
            scheme,
            key: key.to_string(),
        };
        if self.ordinal_to_index.contains_key(&book.ordinal) {
            return Err(duplicate(LookupScheme::Ordinal, &book.ordinal.to_string()));
        }
        if self.code_to_index.contains_key(&book.code) {
            return Err(duplicate(LookupScheme::Code, &book.code));
        }
        if self.abbreviation_to_index.contains_key(&book.abbreviation) {
            return Err(duplicate(LookupScheme::Abbreviation, &book.abbreviation));
        }
        if self.osis_to_index.contains_key(&book.osis) {
            return Err(duplicate(LookupScheme::Osis, &book.osis));
        }
        if let Some(name) = book.names().find(|n| self.name_to_index.contains_key(*n)) {
            return Err(duplicate(LookupScheme::Name, name));
        }
        let alternate = book.alternate_code();
        if self.alternate_to_index.contains_key(&alternate) {
            return Err(duplicate(LookupScheme::AlternateCode, &alternate));
        }
        if let Some(biblia) = book.biblia.as_deref() {
            if self.biblia_to_index.contains_key(biblia) {
                return Err(duplicate(LookupScheme::Biblia, biblia));
            }
        }

        let index = self.books.len();
        self.ordinal_to_index.insert(book.ordinal, index);
        self.code_to_index.insert(book.code.clone(), index);
        self.abbreviation_to_index
            .insert(book.abbreviation.clone(), index);
        self.osis_to_index.insert(book.osis.clone(), index);
        for name in book.names() {
            self.name_to_index.insert(name.to_string(), index);
        }
        self.alternate_to_index.insert(alternate, index);
        if let Some(biblia) = &book.biblia {
            self.biblia_to_index.insert(biblia.clone(), index);
        }

        self.books.push(book);
        Ok(())
    }

    fn rebuild_matcher(&mut self) -> Result<(), CatalogError> {
        let names = self
            .name_to_index
            .keys()
            .chain(self.name_variants.keys())
            .map(String::as_str);
        self.matcher = NameMatcher::new(names)?;
        Ok(())
    }

    fn by_index(&self, index: Option<&usize>, scheme: LookupScheme, key: &str) -> Result<&BookRecord, RefError> {
        index
            .map(|&idx| &self.books[idx])
            .ok_or_else(|| RefError::not_found(scheme, key))
    }

    /// Look up a book by its Logos-style ordinal.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` for an unknown ordinal.
    pub fn lookup_by_ordinal(&self, ordinal: u16) -> Result<&BookRecord, RefError> {
        self.by_index(
            self.ordinal_to_index.get(&ordinal),
            LookupScheme::Ordinal,
            &ordinal.to_string(),
        )
    }

    /// Look up a book by its 2-character code.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` for an unknown code.
    pub fn lookup_by_code(&self, code: &str) -> Result<&BookRecord, RefError> {
        self.by_index(self.code_to_index.get(code), LookupScheme::Code, code)
    }

    /// Look up a book by its USFM abbreviation; matching is case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` for an unknown abbreviation.
    pub fn lookup_by_abbreviation(&self, abbreviation: &str) -> Result<&BookRecord, RefError> {
        self.by_index(
            self.abbreviation_to_index.get(abbreviation),
            LookupScheme::Abbreviation,
            abbreviation,
        )
    }

    /// Look up a book by its OSIS id.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` for an unknown OSIS id.
    pub fn lookup_by_osis(&self, osis: &str) -> Result<&BookRecord, RefError> {
        self.by_index(self.osis_to_index.get(osis), LookupScheme::Osis, osis)
    }

    /// Look up a book by name, accepting alternate names and close spellings.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` for an unknown name.
    pub fn lookup_by_full_name(&self, name: &str) -> Result<&BookRecord, RefError> {
        let normalized = self.name_variants.get(name).map_or(name, String::as_str);
        self.by_index(self.name_to_index.get(normalized), LookupScheme::Name, name)
    }

    /// Look up a book by its legacy alternate code (Matthew is "41").
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` for an unknown code.
    pub fn lookup_by_alternate_numbering(&self, code: &str) -> Result<&BookRecord, RefError> {
        self.by_index(
            self.alternate_to_index.get(code),
            LookupScheme::AlternateCode,
            code,
        )
    }

    /// Look up a book by its biblia.com abbreviation ("Mk").
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` for an unknown abbreviation.
    pub fn lookup_by_biblia(&self, biblia: &str) -> Result<&BookRecord, RefError> {
        self.by_index(self.biblia_to_index.get(biblia), LookupScheme::Biblia, biblia)
    }

    /// Resolve a key of any scheme: code, abbreviation, OSIS id, name, Biblia
    /// abbreviation or ordinal.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` if no scheme recognizes the key.
    pub fn resolve(&self, key: &str) -> Result<&BookRecord, RefError> {
        self.lookup_by_code(key)
            .or_else(|_| self.lookup_by_abbreviation(&key.to_ascii_uppercase()))
            .or_else(|_| self.lookup_by_osis(key))
            .or_else(|_| self.lookup_by_full_name(key))
            .or_else(|_| self.lookup_by_biblia(key))
            .or_else(|_| match fields::parse_field("Ordinal", key) {
                Ok(ordinal) => self.lookup_by_ordinal(ordinal),
                Err(_) => Err(RefError::not_found(LookupScheme::Name, key)),
            })
    }

    /// Matcher over every name, alternate name and close spelling
    #[must_use]
    pub fn name_matcher(&self) -> &NameMatcher {
        &self.matcher
    }

    /// The books of `canon`, in canon order.
    ///
    /// # Errors
    ///
    /// Returns `RefError::NotFound` if a book of the canon is missing.
    pub fn canon_books(&self, canon: Canon) -> Result<Vec<&BookRecord>, RefError> {
        canon
            .abbreviations()
            .map(|abbreviation| self.lookup_by_abbreviation(abbreviation))
            .collect()
    }

    /// All books, in load order
    #[must_use]
    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            name_variants: self.name_variants.clone(),
            books: self.books.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of books in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BookCatalog {
        BookCatalog::load_embedded().unwrap()
    }

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 86);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_lookup_by_ordinal() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_by_ordinal(62).unwrap().code, "41");
        assert_eq!(catalog.lookup_by_ordinal(1).unwrap().abbreviation, "GEN");
        assert_eq!(catalog.lookup_by_ordinal(40).unwrap().abbreviation, "TOB");
        let err = catalog.lookup_by_ordinal(60).unwrap_err();
        assert_eq!(
            err,
            RefError::NotFound {
                scheme: LookupScheme::Ordinal,
                key: "60".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_by_abbreviation() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_by_abbreviation("MRK").unwrap().code, "41");
        assert!(catalog.lookup_by_abbreviation("mrk").unwrap_err().is_not_found());
    }

    #[test]
    fn test_lookup_by_osis_and_code() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_by_osis("1Cor").unwrap().code, "46");
        assert_eq!(catalog.lookup_by_code("01").unwrap().name, "Genesis");
        assert!(catalog.lookup_by_code("99").is_err());
    }

    #[test]
    fn test_lookup_by_full_name() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_by_full_name("Mark").unwrap().code, "41");
        assert_eq!(catalog.lookup_by_full_name("1 Corinthians").unwrap().code, "46");
        assert_eq!(
            catalog.lookup_by_full_name("Acts of the Apostles").unwrap().code,
            "44"
        );
        assert!(catalog.lookup_by_full_name("Marc").unwrap_err().is_not_found());
    }

    #[test]
    fn test_lookup_close_spellings() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_by_full_name("Psalm").unwrap().code, "19");
        assert_eq!(catalog.lookup_by_full_name("Song of Solomon").unwrap().code, "22");
    }

    #[test]
    fn test_lookup_by_alternate_numbering() {
        let catalog = catalog();
        assert_eq!(
            catalog.lookup_by_alternate_numbering("41").unwrap().abbreviation,
            "MAT"
        );
        assert_eq!(
            catalog.lookup_by_alternate_numbering("67").unwrap().abbreviation,
            "REV"
        );
        assert_eq!(
            catalog.lookup_by_alternate_numbering("01").unwrap().abbreviation,
            "GEN"
        );
    }

    #[test]
    fn test_lookup_by_biblia() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_by_biblia("Mk").unwrap().abbreviation, "MRK");
        assert_eq!(catalog.lookup_by_biblia("Ge").unwrap().code, "01");
        assert_eq!(catalog.lookup_by_biblia("1Co").unwrap().code, "46");
        assert!(catalog.lookup_by_biblia("MRK").unwrap_err().is_not_found());
    }

    #[test]
    fn test_add_name_variant() {
        let mut catalog = catalog();
        assert!(catalog.lookup_by_full_name("Gospel of Mark").is_err());

        catalog.add_name_variant("Gospel of Mark", "Mark").unwrap();
        assert_eq!(catalog.lookup_by_full_name("Gospel of Mark").unwrap().code, "41");
        assert_eq!(
            catalog.name_matcher().find_longest("Gospel of Mark 4:3"),
            Some("Gospel of Mark")
        );
    }

    #[test]
    fn test_resolve_any_scheme() {
        let catalog = catalog();
        for key in ["41", "MRK", "mrk", "Mark", "Mk"] {
            assert_eq!(catalog.resolve(key).unwrap().code, "41", "key {key}");
        }
        assert!(catalog.resolve("Nowhere").unwrap_err().is_not_found());
        assert!(catalog.resolve("+87").unwrap_err().is_not_found());
    }

    #[test]
    fn test_name_matcher_longest() {
        let catalog = catalog();
        let matcher = catalog.name_matcher();
        assert_eq!(matcher.find_longest("Song of Songs 1:1"), Some("Song of Songs"));
        assert_eq!(matcher.find_longest("1 John 3:16"), Some("1 John"));
        assert_eq!(matcher.find_longest("John 3:16"), Some("John"));
        assert_eq!(
            matcher.find_longest("Psalms of Solomon 2"),
            Some("Psalms of Solomon")
        );
        assert_eq!(matcher.find_longest("Psalm 23"), Some("Psalm"));
        assert_eq!(matcher.find_longest("Nowhere 1"), None);
    }

    #[test]
    fn test_empty_matcher() {
        let catalog = BookCatalog::new();
        assert_eq!(catalog.name_matcher().find_longest("Mark 4"), None);
    }

    #[test]
    fn test_canon_books() {
        let catalog = catalog();
        let nt = catalog.canon_books(Canon::NewTestament).unwrap();
        assert_eq!(nt.len(), 27);
        assert_eq!(nt[0].abbreviation, "MAT");
        assert_eq!(catalog.canon_books(Canon::Catholic).unwrap().len(), 73);

        let mut partial = BookCatalog::new();
        partial
            .add_book(BookRecord::new(62, "41", "MRK", "Mark", "Mark"))
            .unwrap();
        assert!(partial
            .canon_books(Canon::NewTestament)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_add_book() {
        let mut catalog = BookCatalog::new();
        assert_eq!(catalog.len(), 0);

        catalog
            .add_book(BookRecord::new(62, "41", "MRK", "Mark", "Mark"))
            .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.name_matcher().find_longest("Mark 4"), Some("Mark"));

        let err = catalog
            .add_book(BookRecord::new(63, "41", "LUK", "Luke", "Luke"))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Duplicate {
                scheme: LookupScheme::Code,
                ..
            }
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_to_json() {
        let catalog = catalog();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"books\""));
        assert!(json.contains("\"Song of Solomon\""));

        let reloaded = BookCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.len(), catalog.len());
        assert_eq!(reloaded.lookup_by_full_name("Psalm").unwrap().code, "19");
    }

    #[test]
    fn test_from_json_rejects_duplicate_names() {
        let json = r#"{
            "version": "1.0.0",
            "created_at": "2026-01-01T00:00:00+00:00",
            "books": [
                {"ordinal": 1, "code": "01", "abbreviation": "GEN", "osis": "Gen", "name": "Genesis"},
                {"ordinal": 2, "code": "02", "abbreviation": "EXO", "osis": "Exod", "name": "Genesis"}
            ]
        }"#;
        let err = BookCatalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Duplicate {
                scheme: LookupScheme::Name,
                ..
            }
        ));

        let mut catalog = BookCatalog::new();
        catalog
            .add_book(
                BookRecord::new(65, "44", "ACT", "Acts", "Acts").with_alt_name("Acts of the Apostles"),
            )
            .unwrap();
        let err = catalog
            .add_book(BookRecord::new(66, "45", "ROM", "Rom", "Acts of the Apostles"))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Duplicate {
                scheme: LookupScheme::Name,
                ..
            }
        ));
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.lookup_by_full_name("Acts of the Apostles").unwrap().code,
            "44"
        );
    }

    #[test]
    fn test_add_book_rejects_duplicate_alternate_and_biblia() {
        let mut catalog = BookCatalog::new();
        catalog
            .add_book(BookRecord::new(62, "41", "MRK", "Mark", "Mark").with_biblia("Mk"))
            .unwrap();

        // Matthew's alternate code "42" collides with a book whose own code is "42"
        let mut shifted = BookCatalog::new();
        shifted
            .add_book(BookRecord::new(61, "41", "MAT", "Matt", "Matthew"))
            .unwrap();
        let err = shifted
            .add_book(BookRecord::new(3, "42", "LEV", "Lev", "Leviticus"))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Duplicate {
                scheme: LookupScheme::AlternateCode,
                ..
            }
        ));

        let err = catalog
            .add_book(BookRecord::new(63, "42", "LUK", "Luke", "Luke").with_biblia("Mk"))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Duplicate {
                scheme: LookupScheme::Biblia,
                ..
            }
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"{
            "version": "1.0.0",
            "created_at": "2026-01-01T00:00:00+00:00",
            "books": [
                {"ordinal": 1, "code": "01", "abbreviation": "GEN", "osis": "Gen", "name": "Genesis"},
                {"ordinal": 1, "code": "02", "abbreviation": "EXO", "osis": "Exod", "name": "Exodus"}
            ]
        }"#;
        let err = BookCatalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Duplicate {
                scheme: LookupScheme::Ordinal,
                ..
            }
        ));
    }
}
