//! # Generator
//!
//! The inverse of the parser: synthesize a valid 10-digit personnummer for
//! a birth date and serial. The result is always produced by running the
//! synthesized text through [`Personnummer::parse`], and it is only
//! returned if it resolves back to the requested birth date.

use chrono::{Datelike, NaiveDate};

use crate::checksum;
use crate::clock::{Clock, SystemClock};
use crate::error::PersonnummerError;
use crate::personnummer::{Personnummer, Separator};

/// Serial used when none is given.
pub const DEFAULT_SERIAL: &str = "000";

/// Generate a personnummer for `birth_date` against the system clock.
///
/// # Errors
///
/// See [`generate_with`].
pub fn generate(birth_date: NaiveDate, serial: Option<&str>) -> Result<Personnummer, PersonnummerError> {
    generate_with(birth_date, serial, &SystemClock)
}

/// Generate a personnummer for `birth_date`, resolving the century against
/// `clock`.
///
/// The serial defaults to [`DEFAULT_SERIAL`] and is zero padded to three
/// digits. No separator is written unless one is needed: subjects whose
/// plain 10-digit reading would land a century too late get `+`.
///
/// # Errors
///
/// - [`PersonnummerError::InvalidSerial`] if `serial` is not 1 to 3 ASCII
///   digits.
/// - [`PersonnummerError::UnrepresentableDate`] if no 10-digit form resolves
///   back to `birth_date` at `clock.now()`: dates today or in the future,
///   and dates 200 or more years back.
pub fn generate_with(
    birth_date: NaiveDate,
    serial: Option<&str>,
    clock: &impl Clock,
) -> Result<Personnummer, PersonnummerError> {
    let serial = serial.unwrap_or(DEFAULT_SERIAL);
    if serial.is_empty() || serial.len() > 3 || !serial.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PersonnummerError::InvalidSerial(serial.to_string()));
    }

    let date = format!(
        "{:02}{:02}{:02}",
        birth_date.year().rem_euclid(100),
        birth_date.month(),
        birth_date.day()
    );
    let serial = format!("{serial:0>3}");
    let check = checksum::check_digit(&format!("{date}{serial}"))
        .ok_or_else(|| PersonnummerError::InvalidSerial(serial.clone()))?;

    for separator in [None, Some(Separator::Plus)] {
        let text = match separator {
            Some(sep) => format!("{date}{sep}{serial}{check}"),
            None => format!("{date}{serial}{check}"),
        };
        let pnr = Personnummer::parse(&text)?;
        if pnr.date_of_birth_with(clock) == birth_date {
            tracing::debug!(%birth_date, personnummer = %text, "generated personnummer");
            return Ok(pnr);
        }
    }

    Err(PersonnummerError::UnrepresentableDate(birth_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::at_date(date(2015, 6, 23))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn generates_known_number() {
        let pnr = generate_with(date(1964, 8, 23), Some("323"), &clock()).unwrap();
        assert_eq!(pnr.as_str(), "6408233234");
        assert_eq!(pnr.format_with("yymmdd-nnnx", &clock()), "640823-3234");
    }

    #[test]
    fn default_serial_is_zeroes() {
        let pnr = generate_with(date(1964, 8, 23), None, &clock()).unwrap();
        assert_eq!(pnr.serial(), "000");
        assert!(Personnummer::try_parse(pnr.as_str()).is_some());
    }

    #[test]
    fn short_serial_is_padded() {
        let pnr = generate_with(date(1964, 8, 23), Some("7"), &clock()).unwrap();
        assert_eq!(pnr.serial(), "007");
    }

    #[test]
    fn invalid_serial_rejected() {
        for bad in ["", "1234", "12a", "-12"] {
            assert_eq!(
                generate_with(date(1964, 8, 23), Some(bad), &clock()),
                Err(PersonnummerError::InvalidSerial(bad.to_string()))
            );
        }
    }

    #[test]
    fn centenarian_gets_plus() {
        let pnr = generate_with(date(1910, 1, 1), Some("123"), &clock()).unwrap();
        assert_eq!(pnr.separator(), Some(Separator::Plus));
        assert_eq!(pnr.date_of_birth_with(&clock()), date(1910, 1, 1));
    }

    #[test]
    fn future_and_today_unrepresentable() {
        let today = date(2015, 6, 23);
        assert_eq!(
            generate_with(today, None, &clock()),
            Err(PersonnummerError::UnrepresentableDate(today))
        );
        let future = date(2016, 1, 1);
        assert_eq!(
            generate_with(future, None, &clock()),
            Err(PersonnummerError::UnrepresentableDate(future))
        );
    }

    #[test]
    fn two_centuries_back_unrepresentable() {
        let old = date(1800, 1, 1);
        assert_eq!(
            generate_with(old, None, &clock()),
            Err(PersonnummerError::UnrepresentableDate(old))
        );
    }

    #[test]
    fn hundredth_birthday_without_plus() {
        // Exactly 100 today: the plain reading already rolls back a century.
        let pnr = generate_with(date(1915, 6, 23), None, &clock()).unwrap();
        assert_eq!(pnr.separator(), None);
        assert_eq!(pnr.date_of_birth_with(&clock()), date(1915, 6, 23));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::clock::FixedClock;
    use proptest::prelude::*;

    proptest! {
        /// Every date in the 199 years before "now" round-trips.
        #[test]
        fn generated_numbers_roundtrip(days_back in 1i64..(365 * 199), serial in 0u32..1000) {
            let today = NaiveDate::from_ymd_opt(2015, 6, 23).unwrap();
            let clock = FixedClock::at_date(today);
            let birth = today - chrono::Duration::days(days_back);
            let serial = format!("{serial:03}");

            let pnr = generate_with(birth, Some(&serial), &clock).unwrap();
            prop_assert!(crate::is_valid(pnr.as_str()));
            prop_assert_eq!(pnr.date_of_birth_with(&clock), birth);
            prop_assert_eq!(pnr.serial(), serial.as_str());
        }
    }
}
