//! # Formatter
//!
//! Expands a small template language into personnummer text.
//!
//! | Token  | Expands to                                         |
//! |--------|----------------------------------------------------|
//! | `yyyy` | four-digit birth year (resolved against the clock) |
//! | `yy`   | the two-digit year field as written                |
//! | `mm`   | month field                                        |
//! | `dd`   | day field as written (not coordination adjusted)   |
//! | `-`    | separator (computed when the input had none)       |
//! | `nnn`  | serial                                             |
//! | `x`    | check digit                                        |
//!
//! `\` emits the following character verbatim. Anything else is copied
//! through unchanged, so a template can never fail to expand.

use chrono::{Datelike, NaiveDateTime};

use crate::century;
use crate::personnummer::Personnummer;

/// `YYMMDD-NNNC`.
pub const FORMAT_TRADITIONAL: &str = "yymmdd-nnnx";

/// `YYYYMMDDNNNC`.
pub const FORMAT_MODERN: &str = "yyyymmddnnnx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    FullYear,
    Year,
    Month,
    Day,
    Separator,
    Serial,
    CheckDigit,
}

/// Template tokens, longest first. The first entry that matches at a scan
/// position wins, which makes `yyyy` take precedence over `yy`.
const TOKENS: [(&str, Token); 7] = [
    ("yyyy", Token::FullYear),
    ("nnn", Token::Serial),
    ("yy", Token::Year),
    ("mm", Token::Month),
    ("dd", Token::Day),
    ("-", Token::Separator),
    ("x", Token::CheckDigit),
];

const ESCAPE: char = '\\';

/// Expand `template` for `pnr`, resolving derived values against `now`.
pub fn expand(pnr: &Personnummer, template: &str, now: NaiveDateTime) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut rest = template;

    while let Some(c) = rest.chars().next() {
        if c == ESCAPE {
            let mut chars = rest[1..].chars();
            if let Some(escaped) = chars.next() {
                out.push(escaped);
                rest = chars.as_str();
                continue;
            }
        }

        match TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
            Some((text, token)) => {
                push_token(&mut out, pnr, *token, now);
                rest = &rest[text.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

fn push_token(out: &mut String, pnr: &Personnummer, token: Token, now: NaiveDateTime) {
    match token {
        Token::FullYear => {
            let year = century::resolve_birth_date(pnr, now).year();
            out.push_str(&format!("{year:04}"));
        }
        Token::Year => out.push_str(pnr.year()),
        Token::Month => out.push_str(pnr.month()),
        Token::Day => out.push_str(pnr.day()),
        Token::Separator => out.push(century::effective_separator(pnr, now).as_char()),
        Token::Serial => out.push_str(pnr.serial()),
        Token::CheckDigit => out.push_str(pnr.check_digit()),
    }
}
