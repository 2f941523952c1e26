//! # Grammar Matcher
//!
//! Decomposes text of the fixed shape
//!
//! ```text
//! [century(2)] year(2) month(2) day(2) [separator(- or +)] serial(3) check(1)
//! ```
//!
//! into its fields. This is a purely syntactic check: a structural match says
//! nothing about the check digit or whether the date exists.

use crate::personnummer::Separator;

/// Fields of a structurally well-formed personnummer, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    /// Two-digit century, present only for 12-digit input.
    pub century: Option<&'a str>,
    /// Two-digit year.
    pub year: &'a str,
    /// Two-digit month.
    pub month: &'a str,
    /// Two-digit day (coordination numbers carry `day + 60`).
    pub day: &'a str,
    /// Separator as written, if any.
    pub separator: Option<Separator>,
    /// Three-digit serial.
    pub serial: &'a str,
    /// One-digit check digit.
    pub check_digit: &'a str,
}

const SERIAL_AND_CHECK_LEN: usize = 4;

/// Match `text` against the personnummer grammar.
///
/// Returns `None` on any structural mismatch: wrong digit counts, non-digit
/// characters, or a separator anywhere other than directly before the serial.
pub fn match_fields(text: &str) -> Option<Fields<'_>> {
    // Every valid shape is pure ASCII, which also makes byte slicing safe.
    if !text.is_ascii() || text.len() < 10 {
        return None;
    }

    let tail_start = text.len() - SERIAL_AND_CHECK_LEN;
    let tail = &text[tail_start..];
    let (date, separator) = match Separator::from_byte(text.as_bytes()[tail_start - 1]) {
        Some(sep) => (&text[..tail_start - 1], Some(sep)),
        None => (&text[..tail_start], None),
    };

    if !is_digits(date) || !is_digits(tail) {
        return None;
    }

    let (century, ymd) = match date.len() {
        6 => (None, date),
        8 => (Some(&date[..2]), &date[2..]),
        _ => return None,
    };

    Some(Fields {
        century,
        year: &ymd[0..2],
        month: &ymd[2..4],
        day: &ymd[4..6],
        separator,
        serial: &tail[0..3],
        check_digit: &tail[3..4],
    })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
