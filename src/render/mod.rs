//! Rendering identifiers back into external notations.
//!
//! Rendering is the inverse of [`crate::parsing`]: for any reference `r` at
//! book, chapter or verse level, parsing `render(r, n)` in notation `n` gives
//! back `r`. Word references render at verse level in the human notations.

pub mod uri;

use crate::catalog::store::BookCatalog;
use crate::core::error::RefError;
use crate::core::fields::DEFAULT_PART;
use crate::core::reference::Identifier;
use crate::core::simplify::Reference;
use crate::core::types::Notation;
use crate::parsing::logos::LOGOS_PREFIX;
use crate::parsing::ubs;

/// Render `reference` in `notation`.
///
/// # Errors
///
/// Returns `RefError::NotFound` if the book is not in the catalog. UBS output
/// fails with `RefError::IncompatibleKind` for book and chapter references,
/// and with `RefError::LossyConversion` for a word part other than `1`.
pub fn render(
    reference: &Reference,
    notation: Notation,
    catalog: &BookCatalog,
) -> Result<String, RefError> {
    if notation == Notation::Canonical {
        return Ok(reference.as_str().to_string());
    }
    if notation == Notation::Ubs {
        return render_ubs(reference);
    }

    let book = catalog.lookup_by_code(reference.book_code())?;
    let (head, chapter_sep, verse_sep) = match notation {
        Notation::Logos => (format!("{LOGOS_PREFIX}.{}", book.ordinal), '.', '.'),
        Notation::Osis => (book.osis.clone(), '.', '.'),
        Notation::Name => (book.name.clone(), ' ', ':'),
        _ => (book.abbreviation.clone(), ' ', ':'),
    };

    let mut out = head;
    if let Some(chapter) = reference.chapter() {
        out.push(chapter_sep);
        out.push_str(&chapter.to_string());
        if let Some(verse) = reference.verse() {
            out.push(verse_sep);
            out.push_str(&verse.to_string());
        }
    }
    Ok(out)
}

fn render_ubs(reference: &Reference) -> Result<String, RefError> {
    match reference {
        Reference::Verse(id) => ubs::to_ubs(id.as_str(), None),
        Reference::Word(id) => {
            if id.part() != DEFAULT_PART {
                return Err(RefError::LossyConversion {
                    id: id.as_str().to_string(),
                    part: id.part(),
                });
            }
            ubs::to_ubs(id.to_book_chapter_verse().as_str(), Some(id.word()))
        }
        Reference::Book(_) | Reference::Chapter(_) => Err(RefError::IncompatibleKind(format!(
            "UBS references name verses or words, not the {} identifier {reference}",
            reference.granularity()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;

    fn catalog() -> BookCatalog {
        BookCatalog::load_embedded().unwrap()
    }

    fn r(text: &str) -> Reference {
        Reference::from_canonical(text).unwrap()
    }

    #[test]
    fn test_render_every_notation() {
        let catalog = catalog();
        let verse = r("41004003");
        let cases = [
            (Notation::Canonical, "41004003"),
            (Notation::Logos, "bible.62.4.3"),
            (Notation::Osis, "Mark.4.3"),
            (Notation::Name, "Mark 4:3"),
            (Notation::Usfm, "MRK 4:3"),
            (Notation::Ubs, "04100400300000"),
        ];
        for (notation, expected) in cases {
            assert_eq!(render(&verse, notation, &catalog).unwrap(), expected);
        }
    }

    #[test]
    fn test_render_granularities() {
        let catalog = catalog();
        assert_eq!(render(&r("41"), Notation::Name, &catalog).unwrap(), "Mark");
        assert_eq!(render(&r("41004"), Notation::Logos, &catalog).unwrap(), "bible.62.4");
        assert_eq!(
            render(&r("46013"), Notation::Osis, &catalog).unwrap(),
            "1Cor.13"
        );
        assert_eq!(
            render(&r("19003000"), Notation::Usfm, &catalog).unwrap(),
            "PSA 3:0"
        );
    }

    #[test]
    fn test_render_word() {
        let catalog = catalog();
        let word = r("410040030031");
        assert_eq!(render(&word, Notation::Usfm, &catalog).unwrap(), "MRK 4:3");
        assert_eq!(render(&word, Notation::Ubs, &catalog).unwrap(), "04100400300006");
        assert_eq!(
            render(&word, Notation::Canonical, &catalog).unwrap(),
            "410040030031"
        );
    }

    #[test]
    fn test_render_ubs_errors() {
        let catalog = catalog();
        let err = render(&r("41004"), Notation::Ubs, &catalog).unwrap_err();
        assert!(matches!(err, RefError::IncompatibleKind(_)));
        let err = render(&r("410040030032"), Notation::Ubs, &catalog).unwrap_err();
        assert!(matches!(err, RefError::LossyConversion { .. }));
    }

    #[test]
    fn test_render_then_parse() {
        let catalog = catalog();
        for text in ["01", "41004", "46013004", "68001002"] {
            let reference = r(text);
            for notation in [
                Notation::Logos,
                Notation::Osis,
                Notation::Name,
                Notation::Usfm,
            ] {
                let rendered = render(&reference, notation, &catalog).unwrap();
                assert_eq!(
                    parse(&rendered, notation, &catalog).unwrap(),
                    reference,
                    "{rendered}"
                );
            }
        }
    }

    #[test]
    fn test_render_unknown_book() {
        let err = render(&r("99001"), Notation::Usfm, &catalog()).unwrap_err();
        assert!(err.is_not_found());
    }
}
