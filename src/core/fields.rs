//! Positional field helpers shared by every identifier type.
//!
//! A canonical identifier is the concatenation of fixed-width fields:
//!
//! | Field   | Offset | Width | Characters |
//! |---------|--------|-------|------------|
//! | book    | 0      | 2     | digits or upper-case letters |
//! | chapter | 2      | 3     | digits |
//! | verse   | 5      | 3     | digits |
//! | word    | 8      | 3     | digits |
//! | part    | 11     | 1     | digit  |

use std::ops::Range;

use crate::core::error::RefError;
use crate::core::types::CanonPrefix;

pub const BOOK: Range<usize> = 0..2;
pub const CHAPTER: Range<usize> = 2..5;
pub const VERSE: Range<usize> = 5..8;
pub const WORD: Range<usize> = 8..11;
pub const PART: Range<usize> = 11..12;

/// The word part assumed when an identifier omits it
pub const DEFAULT_PART: char = '1';

/// Largest value a 3-digit field can hold
pub const MAX_FIELD_VALUE: u16 = 999;

/// Fail unless `text` is ASCII and exactly `width` bytes long.
pub(crate) fn check_width(kind: &str, text: &str, width: usize) -> Result<(), RefError> {
    if !text.is_ascii() || text.len() != width {
        return Err(RefError::format(format!(
            "{kind} must be {width} ASCII characters: '{text}'"
        )));
    }
    Ok(())
}

/// Validate a 2-character book code.
pub(crate) fn check_book_code(code: &str) -> Result<(), RefError> {
    let valid = code.len() == BOOK.len()
        && code
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase());
    if valid {
        Ok(())
    } else {
        Err(RefError::format(format!("Invalid book code: '{code}'")))
    }
}

/// Parse an all-digit positional field into its numeric value.
pub(crate) fn parse_field(name: &str, field: &str) -> Result<u16, RefError> {
    if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
        return Err(RefError::format(format!(
            "{name} field must be numeric: '{field}'"
        )));
    }
    field
        .parse()
        .map_err(|_| RefError::format(format!("{name} field out of range: '{field}'")))
}

/// Zero-pad a chapter, verse or word token to three digits.
///
/// The literal token `title` names a superscription and maps to `000`.
///
/// # Errors
///
/// Returns `RefError::Format` if the token is not 1-3 ASCII digits.
pub fn pad3(token: &str) -> Result<String, RefError> {
    if token == "title" {
        return Ok("000".to_string());
    }
    if token.is_empty() || token.len() > 3 {
        return Err(RefError::format(format!(
            "Expected 1-3 digits or 'title': '{token}'"
        )));
    }
    let value = parse_field("Reference", token)?;
    Ok(pad(value, 3))
}

/// Render `value` as a zero-padded string of `width` digits.
#[must_use]
pub fn pad(value: u16, width: usize) -> String {
    format!("{value:0width$}")
}

/// Derive the canon prefix implied by a book code.
///
/// Numeric codes below 40 are Old Testament, 40-66 New Testament; everything
/// else, including alphanumeric codes, falls into the other bucket.
#[must_use]
pub fn canon_prefix_for(book_code: &str) -> CanonPrefix {
    match parse_field("Book", book_code) {
        Ok(n) if n < u16::from(CanonPrefix::NEW_TESTAMENT_START) => CanonPrefix::OldTestament,
        Ok(n) if n < u16::from(CanonPrefix::OTHER_START) => CanonPrefix::NewTestament,
        _ => CanonPrefix::Other,
    }
}
