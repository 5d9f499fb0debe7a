use crate::catalog::store::BookCatalog;
use crate::core::error::RefError;
use crate::core::simplify::Reference;
use crate::core::types::{CanonPrefix, Granularity, Notation};
use crate::parsing::logos::LOGOS_PREFIX;
use crate::parsing::ubs::{strip_annotation, UBS_WIDTH};
use crate::parsing::{name, osis, parse, usfm};

/// Guess the notation of `text` from its shape alone.
///
/// Detection does not consult the catalog, so `Mark 4:3` (name) and
/// `Gen 2:3` (OSIS with a space) both come back as [`Notation::Name`];
/// [`parse_auto`] falls back through the other human notations.
///
/// # Errors
///
/// Returns `RefError::Format` for empty input.
pub fn detect_notation(text: &str) -> Result<Notation, RefError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RefError::format("Empty reference"));
    }

    if text
        .strip_prefix(LOGOS_PREFIX)
        .is_some_and(|rest| rest.starts_with('.'))
    {
        return Ok(Notation::Logos);
    }

    let stripped = strip_annotation(text);
    if stripped.len() == UBS_WIDTH && stripped.chars().all(|c| c.is_ascii_digit()) {
        return Ok(Notation::Ubs);
    }

    if looks_canonical(text) {
        return Ok(Notation::Canonical);
    }

    if !text.contains(' ') && text.contains('.') {
        return Ok(Notation::Osis);
    }

    let first_token = text.split(' ').next().unwrap_or_default();
    if looks_like_usfm_book(first_token) {
        return Ok(Notation::Usfm);
    }

    Ok(Notation::Name)
}

fn looks_canonical(text: &str) -> bool {
    let digits = match text.chars().next().and_then(CanonPrefix::from_char) {
        Some(_) => &text[1..],
        None => text,
    };
    let widths = [
        Granularity::Book.width(),
        Granularity::Chapter.width(),
        Granularity::Verse.width(),
        Granularity::WordPart.width() - 1,
        Granularity::WordPart.width(),
    ];
    widths.contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Three upper-case letters or digits, at least one a letter: `MRK`, `1CO`
fn looks_like_usfm_book(token: &str) -> bool {
    token.len() == 3
        && token
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        && token.chars().any(|c| c.is_ascii_uppercase())
}

/// Detect the notation of `text` and parse it.
///
/// Text detected as a name that no name matches is retried as OSIS and then
/// as USFM; if all fail, the error from the name parser is returned.
///
/// # Errors
///
/// Returns the parse error for the detected notation.
pub fn parse_auto(text: &str, catalog: &BookCatalog) -> Result<Reference, RefError> {
    let text = text.trim();
    let notation = detect_notation(text)?;
    tracing::debug!(text, %notation, "Detected reference notation");

    if notation != Notation::Name {
        return parse(text, notation, catalog);
    }
    name::parse_name(text, catalog)
        .or_else(|err| {
            osis::parse_osis(text, catalog)
                .or_else(|_| usfm::parse_usfm(text, catalog))
                .map_err(|_| err)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_notation() {
        let cases = [
            ("bible.62.4.3", Notation::Logos),
            ("04100400300006", Notation::Ubs),
            ("04100400300006{N:001}", Notation::Ubs),
            ("41", Notation::Canonical),
            ("41004", Notation::Canonical),
            ("41004003", Notation::Canonical),
            ("41004003001", Notation::Canonical),
            ("n410040030011", Notation::Canonical),
            ("Mark.4.3", Notation::Osis),
            ("1Cor.13", Notation::Osis),
            ("MRK 4:3", Notation::Usfm),
            ("1CO", Notation::Usfm),
            ("Mark 4:3", Notation::Name),
            ("1 Corinthians 13:4", Notation::Name),
            ("Gen 2:3", Notation::Name),
        ];
        for (text, expected) in cases {
            assert_eq!(detect_notation(text).unwrap(), expected, "{text}");
        }
        assert!(detect_notation("   ").unwrap_err().is_format());
    }

    #[test]
    fn test_parse_auto() {
        let catalog = BookCatalog::load_embedded().unwrap();
        let expected = Reference::from_canonical("41004003").unwrap();
        for text in [
            "41004003",
            "bible.62.4.3",
            "Mark.4.3",
            "Mark 4:3",
            "MRK 4:3",
            "mrk 4:3",
            " Mark 4:3 ",
            "04100400300000",
        ] {
            assert_eq!(parse_auto(text, &catalog).unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn test_parse_auto_osis_with_space() {
        let catalog = BookCatalog::load_embedded().unwrap();
        assert_eq!(parse_auto("Gen 2:3", &catalog).unwrap().as_str(), "01002003");
    }

    #[test]
    fn test_parse_auto_keeps_name_error() {
        let catalog = BookCatalog::load_embedded().unwrap();
        assert!(parse_auto("Nowhere 1:1", &catalog)
            .unwrap_err()
            .is_not_found());
    }
}
