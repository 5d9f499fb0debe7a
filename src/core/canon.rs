use serde::{Deserialize, Serialize};

static OLD_TESTAMENT: [&str; 39] = [
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA", "1KI", "2KI", "1CH",
    "2CH", "EZR", "NEH", "EST", "JOB", "PSA", "PRO", "ECC", "SNG", "ISA", "JER", "LAM", "EZK",
    "DAN", "HOS", "JOL", "AMO", "OBA", "JON", "MIC", "NAM", "HAB", "ZEP", "HAG", "ZEC", "MAL",
];

static NEW_TESTAMENT: [&str; 27] = [
    "MAT", "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHP", "COL", "1TH",
    "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAS", "1PE", "2PE", "1JN", "2JN", "3JN", "JUD",
    "REV",
];

/// Old Testament in the NAB order, deuterocanonical books interleaved
static CATHOLIC_OLD_TESTAMENT: [&str; 46] = [
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA", "1KI", "2KI", "1CH",
    "2CH", "EZR", "NEH", "TOB", "JDT", "EST", "1MA", "2MA", "JOB", "PSA", "PRO", "ECC", "SNG",
    "WIS", "SIR", "ISA", "JER", "LAM", "BAR", "EZK", "DAN", "HOS", "JOL", "AMO", "OBA", "JON",
    "MIC", "NAM", "HAB", "ZEP", "HAG", "ZEC", "MAL",
];

/// A named selection and ordering of books
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Canon {
    /// 66 books
    Protestant,
    /// 73 books
    Catholic,
    /// 27 books
    NewTestament,
}

impl Canon {
    pub const ALL: [Canon; 3] = [Self::Protestant, Self::Catholic, Self::NewTestament];

    /// USFM abbreviations of the canon's books, in canon order
    pub fn abbreviations(self) -> impl Iterator<Item = &'static str> {
        let old: &'static [&'static str] = match self {
            Self::Protestant => &OLD_TESTAMENT,
            Self::Catholic => &CATHOLIC_OLD_TESTAMENT,
            Self::NewTestament => &[],
        };
        old.iter().chain(NEW_TESTAMENT.iter()).copied()
    }

    #[must_use]
    pub fn book_count(self) -> usize {
        self.abbreviations().count()
    }

    /// Parse a canon name as given on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "protestant" => Some(Self::Protestant),
            "catholic" => Some(Self::Catholic),
            "nt" | "new_testament" | "new-testament" => Some(Self::NewTestament),
            _ => None,
        }
    }
}

impl std::fmt::Display for Canon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Protestant => write!(f, "protestant"),
            Self::Catholic => write!(f, "catholic"),
            Self::NewTestament => write!(f, "new_testament"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canon_sizes() {
        assert_eq!(Canon::Protestant.book_count(), 66);
        assert_eq!(Canon::Catholic.book_count(), 73);
        assert_eq!(Canon::NewTestament.book_count(), 27);
    }

    #[test]
    fn test_canon_order() {
        let catholic: Vec<&str> = Canon::Catholic.abbreviations().collect();
        assert_eq!(catholic[16], "TOB");
        assert_eq!(catholic[46], "MAT");
        assert_eq!(Canon::NewTestament.abbreviations().next(), Some("MAT"));
        assert_eq!(Canon::Protestant.abbreviations().last(), Some("REV"));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Canon::from_name("Catholic"), Some(Canon::Catholic));
        assert_eq!(Canon::from_name("nt"), Some(Canon::NewTestament));
        assert_eq!(Canon::from_name("ethiopic"), None);
        for canon in Canon::ALL {
            assert_eq!(Canon::from_name(&canon.to_string()), Some(canon));
        }
    }
}
