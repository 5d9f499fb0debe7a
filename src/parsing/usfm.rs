use crate::catalog::store::BookCatalog;
use crate::core::error::RefError;
use crate::core::simplify::Reference;
use crate::parsing::{build_reference, split_chapter_verse};

/// Parse a USFM reference: `MRK`, `MRK 4`, `MRK 4:3`.
///
/// The abbreviation is upper-cased before lookup, so `mrk 4:3` is accepted.
///
/// # Errors
///
/// Returns `RefError::Format` for malformed input, or `RefError::NotFound`
/// for an unknown abbreviation.
pub fn parse_usfm(text: &str, catalog: &BookCatalog) -> Result<Reference, RefError> {
    let (book_token, rest) = match text.split_once(' ') {
        Some((book, rest)) => (book, Some(rest)),
        None => (text, None),
    };
    let book = catalog.lookup_by_abbreviation(&book_token.to_ascii_uppercase())?;

    match rest {
        None => build_reference(&book.code, None, None),
        Some(rest) => {
            let (chapter, verse) = split_chapter_verse(text, rest, ':')?;
            build_reference(&book.code, Some(chapter), verse)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> BookCatalog {
        BookCatalog::load_embedded().unwrap()
    }

    #[test]
    fn test_parse_usfm() {
        let catalog = catalog();
        assert_eq!(parse_usfm("GEN 2:3", &catalog).unwrap().as_str(), "01002003");
        assert_eq!(parse_usfm("MRK 4", &catalog).unwrap().as_str(), "41004");
        assert_eq!(parse_usfm("MRK", &catalog).unwrap().as_str(), "41");
        assert_eq!(parse_usfm("1CO 13:4", &catalog).unwrap().as_str(), "46013004");
    }

    #[test]
    fn test_parse_usfm_upper_cases_book() {
        assert_eq!(
            parse_usfm("mrk 4:3", &catalog()).unwrap().as_str(),
            "41004003"
        );
    }

    #[test]
    fn test_parse_usfm_errors() {
        let catalog = catalog();
        assert!(parse_usfm("MARK 4:3", &catalog).unwrap_err().is_not_found());
        assert!(parse_usfm("MRK 4.3", &catalog).unwrap_err().is_format());
        assert!(parse_usfm("MRK 4:3:2", &catalog).unwrap_err().is_format());
        assert!(parse_usfm("MRK  4", &catalog).unwrap_err().is_format());
    }
}
