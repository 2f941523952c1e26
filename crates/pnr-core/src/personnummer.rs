//! # The `Personnummer` record
//!
//! An immutable, fully validated Swedish personal identity number (or
//! coordination number). Construction goes through [`Personnummer::parse`],
//! which runs the grammar matcher, range checks on month and day, and the
//! check digit. A value of this type therefore always satisfies:
//!
//! - `year‖month‖day‖serial‖check_digit` passes the mod 10 checksum;
//! - `month` is in `01..=12`;
//! - `day` is in `01..=31`, or `61..=91` for a coordination number;
//! - century `00` never comes with a `+` separator (that would place the
//!   birth before year 1).
//!
//! Values that depend on "now" (birth date, the separator shown when the
//! input had none, age) are never stored. They are recomputed from a
//! [`Clock`] on every call.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::century;
use crate::checksum;
use crate::clock::{Clock, SystemClock};
use crate::error::PersonnummerError;
use crate::format::{self, FORMAT_MODERN, FORMAT_TRADITIONAL};
use crate::grammar;

/// Added to the day of month in a coordination number.
pub const COORDINATION_NUMBER_OFFSET: u32 = 60;

/// Deserialize as a plain `String`, then route through `parse()` so that
/// invalid numbers are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// The character between the date and the serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    /// `-`: the subject is younger than 100.
    #[serde(rename = "-")]
    Dash,
    /// `+`: the subject is 100 or older; resolve one century further back.
    #[serde(rename = "+")]
    Plus,
}

impl Separator {
    pub(crate) fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'-' => Some(Self::Dash),
            b'+' => Some(Self::Plus),
            _ => None,
        }
    }

    /// The separator character.
    pub fn as_char(self) -> char {
        match self {
            Self::Dash => '-',
            Self::Plus => '+',
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A validated Swedish personal identity number.
///
/// Serializes as the original input string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Personnummer {
    raw: String,
    century: Option<String>,
    year: String,
    month: String,
    day: String,
    separator: Option<Separator>,
    serial: String,
    check_digit: String,
}

impl_validating_deserialize!(Personnummer);

impl Personnummer {
    /// Parse and validate a personnummer.
    ///
    /// Accepts `YYMMDD-NNNC`, `YYMMDD+NNNC`, `YYMMDDNNNC` and the same three
    /// shapes with a two-digit century prefix.
    ///
    /// # Errors
    ///
    /// Returns [`PersonnummerError::Malformed`] carrying `text` if the shape,
    /// the month/day ranges or the check digit are wrong, or if century `00`
    /// is combined with `+`.
    pub fn parse(text: &str) -> Result<Self, PersonnummerError> {
        let malformed = || PersonnummerError::Malformed(text.to_string());

        let Some(fields) = grammar::match_fields(text) else {
            tracing::debug!(input = text, "rejected: does not match personnummer grammar");
            return Err(malformed());
        };

        let month = digits_value(fields.month);
        if !(1..=12).contains(&month) {
            tracing::debug!(input = text, month, "rejected: month out of range");
            return Err(malformed());
        }

        let day = digits_value(fields.day);
        let offset = COORDINATION_NUMBER_OFFSET;
        if !((1..=31).contains(&day) || (offset + 1..=offset + 31).contains(&day)) {
            tracing::debug!(input = text, day, "rejected: day out of range");
            return Err(malformed());
        }

        if fields.century == Some("00") && fields.separator == Some(Separator::Plus) {
            tracing::debug!(input = text, "rejected: century 00 with '+' predates year 1");
            return Err(malformed());
        }

        let digits = [
            fields.year,
            fields.month,
            fields.day,
            fields.serial,
            fields.check_digit,
        ]
        .concat();
        if !checksum::is_valid(&digits) {
            tracing::debug!(input = text, "rejected: check digit mismatch");
            return Err(malformed());
        }

        Ok(Self {
            raw: text.to_string(),
            century: fields.century.map(str::to_string),
            year: fields.year.to_string(),
            month: fields.month.to_string(),
            day: fields.day.to_string(),
            separator: fields.separator,
            serial: fields.serial.to_string(),
            check_digit: fields.check_digit.to_string(),
        })
    }

    /// Parse without an error: `None` for anything [`parse`](Self::parse)
    /// would reject.
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// The original input string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Two-digit century, if the input carried one.
    pub fn century(&self) -> Option<&str> {
        self.century.as_deref()
    }

    /// Two-digit year field.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Two-digit month field.
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Two-digit day field as written (`day + 60` for coordination numbers).
    pub fn day(&self) -> &str {
        &self.day
    }

    /// The separator as written in the input, if any.
    ///
    /// See [`separator_with`](Self::separator_with) for the separator that
    /// is displayed when the input had none.
    pub fn separator(&self) -> Option<Separator> {
        self.separator
    }

    /// Three-digit serial field.
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// One-digit check digit.
    pub fn check_digit(&self) -> &str {
        &self.check_digit
    }

    /// True if the day field carries the coordination offset.
    pub fn is_coordination_number(&self) -> bool {
        self.day_value() > COORDINATION_NUMBER_OFFSET
    }

    /// The coordination-number form of this number: day plus
    /// [`COORDINATION_NUMBER_OFFSET`] with a recomputed check digit. Century
    /// and separator are kept as written, so the birth date is unchanged.
    /// A coordination number is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`PersonnummerError::Malformed`] if the re-encoded text does
    /// not parse.
    pub fn to_coordination_number(&self) -> Result<Self, PersonnummerError> {
        if self.is_coordination_number() {
            return Ok(self.clone());
        }

        let day = format!("{:02}", self.day_value() + COORDINATION_NUMBER_OFFSET);
        let data = [
            self.year.as_str(),
            self.month.as_str(),
            day.as_str(),
            self.serial.as_str(),
        ]
        .concat();
        let check = checksum::check_digit(&data)
            .ok_or_else(|| PersonnummerError::Malformed(self.raw.clone()))?;
        let century = self.century.as_deref().unwrap_or_default();
        let sep = self.separator.map(|s| s.to_string()).unwrap_or_default();
        let text = format!(
            "{century}{}{}{day}{sep}{}{check}",
            self.year, self.month, self.serial
        );
        tracing::debug!(ordinary = %self.raw, coordination = %text, "encoded coordination number");
        Self::parse(&text)
    }

    /// The separator to display: the one written in the input, otherwise
    /// `+` when the subject is 100 or older at `clock.now()`, else `-`.
    pub fn separator_with(&self, clock: &impl Clock) -> Separator {
        century::effective_separator(self, clock.now())
    }

    /// Date of birth resolved against the system clock.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth_with(&SystemClock)
    }

    /// Date of birth resolved against `clock`.
    pub fn date_of_birth_with(&self, clock: &impl Clock) -> NaiveDate {
        century::resolve_birth_date(self, clock.now())
    }

    /// Age in whole years today.
    pub fn age(&self) -> i32 {
        self.age_with(&SystemClock)
    }

    /// Age in whole years at `as_of`, with the birth date resolved against
    /// the system clock.
    pub fn age_at(&self, as_of: NaiveDateTime) -> i32 {
        century::whole_years(self.date_of_birth(), as_of)
    }

    /// Age in whole years at `clock.now()`.
    pub fn age_with(&self, clock: &impl Clock) -> i32 {
        let now = clock.now();
        century::whole_years(century::resolve_birth_date(self, now), now)
    }

    /// Expand `template` against the system clock.
    ///
    /// See [`crate::format`] for the template tokens.
    pub fn format(&self, template: &str) -> String {
        self.format_with(template, &SystemClock)
    }

    /// Expand `template` against `clock`.
    pub fn format_with(&self, template: &str, clock: &impl Clock) -> String {
        format::expand(self, template, clock.now())
    }

    /// `YYMMDD-NNNC` (or `+` for subjects aged 100 or more).
    pub fn to_traditional_string(&self) -> String {
        self.format(FORMAT_TRADITIONAL)
    }

    /// `YYYYMMDDNNNC`.
    pub fn to_modern_string(&self) -> String {
        self.format(FORMAT_MODERN)
    }

    pub(crate) fn century_value(&self) -> Option<i32> {
        self.century.as_deref().map(|c| digits_value(c) as i32)
    }

    pub(crate) fn year_value(&self) -> i32 {
        digits_value(&self.year) as i32
    }

    pub(crate) fn month_value(&self) -> u32 {
        digits_value(&self.month)
    }

    pub(crate) fn day_value(&self) -> u32 {
        digits_value(&self.day)
    }
}

/// Numeric value of a short ASCII digit field already checked by the grammar.
fn digits_value(s: &str) -> u32 {
    s.bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b.wrapping_sub(b'0')))
}

impl From<Personnummer> for String {
    fn from(pnr: Personnummer) -> Self {
        pnr.raw
    }
}

impl FromStr for Personnummer {
    type Err = PersonnummerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Personnummer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_traditional_string())
    }
}

/// True if `text` is a valid personnummer.
pub fn is_valid(text: &str) -> bool {
    Personnummer::try_parse(text).is_some()
}

/// Parse `text` and resolve its date of birth against the system clock.
pub fn date_of_birth_of(text: &str) -> Result<NaiveDate, PersonnummerError> {
    Ok(Personnummer::parse(text)?.date_of_birth())
}

/// Parse `text` and expand `template` for it; `None` means
/// [`FORMAT_TRADITIONAL`].
pub fn format_number(text: &str, template: Option<&str>) -> Result<String, PersonnummerError> {
    let pnr = Personnummer::parse(text)?;
    Ok(pnr.format(template.unwrap_or(FORMAT_TRADITIONAL)))
}

/// Parse `text` and compute today's age in whole years.
pub fn age_of(text: &str) -> Result<i32, PersonnummerError> {
    Ok(Personnummer::parse(text)?.age())
}
