use serde::{Deserialize, Serialize};

use crate::core::fields;
use crate::core::types::CanonPrefix;

/// Ordinals of the books that carry the legacy alternate numbering
const ALTERNATE_ORDINALS: std::ops::RangeInclusive<u16> = 61..=87;

/// One row of the book catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Logos-style index: Genesis = 1, Matthew = 61, Mark = 62
    pub ordinal: u16,

    /// 2-character canonical code ("41")
    pub code: String,

    /// USFM abbreviation ("MRK")
    pub abbreviation: String,

    /// OSIS book id ("Mark")
    pub osis: String,

    /// English name ("Mark")
    pub name: String,

    /// Another accepted English name ("Acts of the Apostles")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_name: Option<String>,

    /// biblia.com abbreviation ("Mk")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biblia: Option<String>,
}

impl BookRecord {
    #[must_use]
    pub fn new(
        ordinal: u16,
        code: impl Into<String>,
        abbreviation: impl Into<String>,
        osis: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            ordinal,
            code: code.into(),
            abbreviation: abbreviation.into(),
            osis: osis.into(),
            name: name.into(),
            alt_name: None,
            biblia: None,
        }
    }

    #[must_use]
    pub fn with_alt_name(mut self, alt_name: impl Into<String>) -> Self {
        self.alt_name = Some(alt_name.into());
        self
    }

    #[must_use]
    pub fn with_biblia(mut self, biblia: impl Into<String>) -> Self {
        self.biblia = Some(biblia.into());
        self
    }

    /// Code under the legacy numbering, where New Testament books are
    /// shifted up by one (Matthew is "41").
    #[must_use]
    pub fn alternate_code(&self) -> String {
        if !ALTERNATE_ORDINALS.contains(&self.ordinal) {
            return self.code.clone();
        }
        match fields::parse_field("Book", &self.code) {
            Ok(n) => fields::pad(n + 1, 2),
            Err(_) => self.code.clone(),
        }
    }

    #[must_use]
    pub fn canon_prefix(&self) -> CanonPrefix {
        fields::canon_prefix_for(&self.code)
    }

    /// Logos reference for the whole book, e.g. `bible.62`
    #[must_use]
    pub fn logos_ref(&self) -> String {
        format!("bible.{}", self.ordinal)
    }

    /// Every English name this book answers to
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.alt_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[must_use]
    fn mark() -> BookRecord {
        BookRecord::new(62, "41", "MRK", "Mark", "Mark")
    }

    #[test]
    fn test_alternate_code() {
        assert_eq!(mark().alternate_code(), "42");
        let genesis = BookRecord::new(1, "01", "GEN", "Gen", "Genesis");
        assert_eq!(genesis.alternate_code(), "01");
        let revelation = BookRecord::new(87, "66", "REV", "Rev", "Revelation");
        assert_eq!(revelation.alternate_code(), "67");
        let tobit = BookRecord::new(40, "68", "TOB", "Tob", "Tobit");
        assert_eq!(tobit.alternate_code(), "68");
    }

    #[test]
    fn test_names() {
        let acts = BookRecord::new(65, "44", "ACT", "Acts", "Acts")
            .with_alt_name("Acts of the Apostles");
        let names: Vec<&str> = acts.names().collect();
        assert_eq!(names, vec!["Acts", "Acts of the Apostles"]);
        assert_eq!(mark().names().count(), 1);
    }

    #[test]
    fn test_logos_ref_and_prefix() {
        assert_eq!(mark().logos_ref(), "bible.62");
        assert_eq!(mark().canon_prefix(), CanonPrefix::NewTestament);
    }
}
