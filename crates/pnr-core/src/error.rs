//! # Error Types
//!
//! Defines the error type returned by the strict entry points of
//! `pnr-core`. All errors use `thiserror` for derive-based `Display` and
//! `Error` implementations.
//!
//! ## Design
//!
//! - Parsing either fully succeeds or fails with [`PersonnummerError::Malformed`]
//!   carrying the original input. The permissive entry points
//!   ([`Personnummer::try_parse`](crate::Personnummer::try_parse),
//!   [`is_valid`](crate::is_valid)) swallow it into `None`/`false`.
//! - Formatting never fails: unknown template characters are copied through.
//! - Generation fails with a dedicated variant when the requested serial or
//!   birth date cannot be encoded.
//! - Text that should name an instant (a fixed "now") but does not fails
//!   with [`PersonnummerError::InvalidInstant`].

use chrono::NaiveDate;
use thiserror::Error;

/// Error returned by the strict operations of this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonnummerError {
    /// The input does not match the grammar, has an out-of-range month or
    /// day, or fails the check digit.
    #[error("Invalid personnummer: {0}")]
    Malformed(String),

    /// The serial handed to the generator is not 1 to 3 ASCII digits.
    #[error("invalid serial {0:?}: expected 1 to 3 digits")]
    InvalidSerial(String),

    /// The birth date cannot be expressed as a 10-digit number that
    /// resolves back to the same date.
    #[error("birth date {0} cannot be encoded as a 10-digit personnummer")]
    UnrepresentableDate(NaiveDate),

    /// Text given as a date or date-time does not parse as either.
    #[error("invalid date or date-time: {0:?}")]
    InvalidInstant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_carries_input() {
        let err = PersonnummerError::Malformed("640883-323".to_string());
        assert_eq!(err.to_string(), "Invalid personnummer: 640883-323");
    }

    #[test]
    fn unrepresentable_message_carries_date() {
        let date = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
        let err = PersonnummerError::UnrepresentableDate(date);
        assert!(err.to_string().contains("2099-01-01"));
    }

    #[test]
    fn invalid_instant_message_is_not_about_personnummer() {
        let err = PersonnummerError::InvalidInstant("yesterday".to_string());
        assert_eq!(err.to_string(), r#"invalid date or date-time: "yesterday""#);
    }
}
