use serde::{Deserialize, Serialize};

/// How many levels of the book/chapter/verse/word hierarchy an identifier names.
///
/// Variants are ordered from coarsest to finest, so `a < b` means `a` is coarser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Book,
    Chapter,
    Verse,
    WordPart,
}

impl Granularity {
    /// Width of the canonical string at this granularity
    #[must_use]
    pub fn width(self) -> usize {
        match self {
            Self::Book => 2,
            Self::Chapter => 5,
            Self::Verse => 8,
            Self::WordPart => 12,
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Book => write!(f, "book"),
            Self::Chapter => write!(f, "chapter"),
            Self::Verse => write!(f, "verse"),
            Self::WordPart => write!(f, "word"),
        }
    }
}

/// Testament tag carried by word-level identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonPrefix {
    /// Book codes below "40"
    OldTestament,
    /// Book codes "40" through "66"
    NewTestament,
    /// Anything else, including alphanumeric codes
    Other,
}

impl CanonPrefix {
    /// Book codes below this value belong to the Old Testament
    pub const NEW_TESTAMENT_START: u8 = 40;
    /// Book codes at or above this value fall outside both testaments
    pub const OTHER_START: u8 = 67;

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::OldTestament => 'o',
            Self::NewTestament => 'n',
            Self::Other => 'x',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'o' => Some(Self::OldTestament),
            'n' => Some(Self::NewTestament),
            'x' => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for CanonPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Key used to look something up in a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupScheme {
    /// Logos-style ordinal index (Genesis = 1, Mark = 62)
    Ordinal,
    /// 2-character canonical code ("41")
    Code,
    /// USFM abbreviation ("MRK")
    Abbreviation,
    /// OSIS book id ("Mark")
    Osis,
    /// English name ("Mark", "1 Corinthians")
    Name,
    /// Legacy numbering where Matthew is "41"
    AlternateCode,
    /// biblia.com book abbreviation ("Mk")
    Biblia,
    /// Chapter metadata keyed by book and chapter
    Chapter,
    /// Published Bible edition for link generation
    Edition,
}

impl std::fmt::Display for LookupScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ordinal => write!(f, "ordinal"),
            Self::Code => write!(f, "book code"),
            Self::Abbreviation => write!(f, "USFM abbreviation"),
            Self::Osis => write!(f, "OSIS id"),
            Self::Name => write!(f, "book name"),
            Self::AlternateCode => write!(f, "alternate book code"),
            Self::Biblia => write!(f, "Biblia abbreviation"),
            Self::Chapter => write!(f, "chapter"),
            Self::Edition => write!(f, "edition"),
        }
    }
}

/// Reference notations understood by the parsers and renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// Fixed-width positional identifier ("41004003")
    Canonical,
    /// Logos dotted reference ("bible.62.4.3")
    Logos,
    /// OSIS reference ("Mark.4.3" or "Mark 4:3")
    Osis,
    /// English name reference ("Mark 4:3")
    Name,
    /// USFM abbreviation reference ("MRK 4:3")
    Usfm,
    /// UBS fourteen-digit reference ("04100400300006")
    Ubs,
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canonical => write!(f, "canonical"),
            Self::Logos => write!(f, "Logos"),
            Self::Osis => write!(f, "OSIS"),
            Self::Name => write!(f, "name"),
            Self::Usfm => write!(f, "USFM"),
            Self::Ubs => write!(f, "UBS"),
        }
    }
}
