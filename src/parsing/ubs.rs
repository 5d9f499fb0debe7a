//! UBS fourteen-digit references.
//!
//! | Offset | Width | Field |
//! |--------|-------|-------|
//! | 0      | 1     | always `0` |
//! | 1      | 2     | book code |
//! | 3      | 3     | chapter |
//! | 6      | 3     | verse |
//! | 9      | 2     | segment, always `00` |
//! | 11     | 3     | word index, doubled |
//!
//! The provider counts words in steps of two, so a stored index is even and
//! halves to the word number. An index of `000` names the whole verse. A
//! trailing annotation such as `{N:001}` or `({N:001})` is ignored.

use std::ops::Range;

use crate::core::error::RefError;
use crate::core::fields::{self, MAX_FIELD_VALUE};
use crate::core::reference::{BookChapterVerseId, WordPartId};
use crate::core::simplify::Reference;

pub const UBS_WIDTH: usize = 14;

const LEAD: Range<usize> = 0..1;
const VERSE_ID: Range<usize> = 1..9;
const SEGMENT: Range<usize> = 9..11;
const WORD: Range<usize> = 11..14;

/// Drop a trailing `{...}` or `({...})` annotation.
pub(crate) fn strip_annotation(text: &str) -> &str {
    let text = text.trim_end();
    if text.ends_with("})") {
        if let Some(pos) = text.rfind("({") {
            return text[..pos].trim_end();
        }
    }
    if text.ends_with('}') {
        if let Some(pos) = text.rfind('{') {
            return text[..pos].trim_end();
        }
    }
    text
}

/// Parse a UBS reference into a verse or word identifier.
///
/// # Errors
///
/// Returns `RefError::Format` for the wrong width, a non-zero leading digit,
/// a non-zero segment, or an odd word index.
pub fn parse_ubs(text: &str) -> Result<Reference, RefError> {
    let digits = strip_annotation(text);
    if digits.len() != UBS_WIDTH || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(RefError::format(format!(
            "UBS reference must be {UBS_WIDTH} digits: '{text}'"
        )));
    }
    if &digits[LEAD] != "0" {
        return Err(RefError::format(format!(
            "UBS reference must start with 0: '{text}'"
        )));
    }
    if &digits[SEGMENT] != "00" {
        return Err(RefError::format(format!(
            "UBS segment must be 00, found {}: '{text}'",
            &digits[SEGMENT]
        )));
    }

    let verse = &digits[VERSE_ID];
    let word = fields::parse_field("Word", &digits[WORD])?;
    if word == 0 {
        return BookChapterVerseId::parse(verse).map(Reference::Verse);
    }
    if word % 2 != 0 {
        return Err(RefError::format(format!(
            "UBS word index must be even, found {word}: '{text}'"
        )));
    }
    let id = format!("{verse}{}", fields::pad(word / 2, 3));
    WordPartId::parse(&id).map(Reference::Word)
}

/// Render a verse or word as a UBS reference.
///
/// # Errors
///
/// Returns `RefError::Format` for a non-numeric book code or a word too large
/// to double into three digits.
pub(crate) fn to_ubs(verse_id: &str, word: Option<u16>) -> Result<String, RefError> {
    if !verse_id[fields::BOOK].chars().all(|c| c.is_ascii_digit()) {
        return Err(RefError::format(format!(
            "UBS references need a numeric book code: '{verse_id}'"
        )));
    }
    let index = word.map_or(0, |w| w * 2);
    if index > MAX_FIELD_VALUE {
        return Err(RefError::format(format!(
            "Word {} does not fit a UBS word index",
            index / 2
        )));
    }
    Ok(format!("0{verse_id}00{}", fields::pad(index, 3)))
}
