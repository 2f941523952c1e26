//! # Century Resolver
//!
//! Turns the two-digit year of a [`Personnummer`] into a full birth date,
//! relative to an instant "now":
//!
//! 1. Coordination numbers carry `day + 60`; the offset is removed first.
//! 2. With an explicit century the year is `century * 100 + year`.
//! 3. Without one, the year starts in the current century and moves back
//!    100 years if that date is not strictly before "now". A number whose
//!    current-century reading falls exactly on today also moves back.
//! 4. A written `+` separator moves the result back another 100 years. This
//!    applies after steps 2 and 3, with or without an explicit century.
//!
//! Day numbers past the end of the month (February 30, or February 29 in a
//! non-leap year) roll over into the following month.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::personnummer::{Personnummer, Separator, COORDINATION_NUMBER_OFFSET};

/// Ages from this many years onward are written with a `+` separator.
pub const CENTENARIAN_AGE: i32 = 100;

/// Resolve the birth date of `pnr` as seen at `now`.
pub fn resolve_birth_date(pnr: &Personnummer, now: NaiveDateTime) -> NaiveDate {
    let month = pnr.month_value();
    let day = calendar_day(pnr.day_value());
    let yy = pnr.year_value();

    let mut year = match pnr.century_value() {
        Some(century) => century * 100 + yy,
        None => {
            let candidate = now.year().div_euclid(100) * 100 + yy;
            if civil_date(candidate, month, day).and_time(NaiveTime::MIN) < now {
                candidate
            } else {
                tracing::trace!(
                    input = pnr.as_str(),
                    candidate,
                    "current-century reading is not in the past; moving back a century"
                );
                candidate - 100
            }
        }
    };

    if pnr.separator() == Some(Separator::Plus) {
        year -= 100;
    }

    civil_date(year, month, day)
}

/// The separator shown for `pnr` at `now`.
pub fn effective_separator(pnr: &Personnummer, now: NaiveDateTime) -> Separator {
    if let Some(sep) = pnr.separator() {
        return sep;
    }
    if whole_years(resolve_birth_date(pnr, now), now) >= CENTENARIAN_AGE {
        Separator::Plus
    } else {
        Separator::Dash
    }
}

/// Whole years elapsed from `birth` (at midnight) to `as_of`.
///
/// Truncates toward zero, so an `as_of` before the birth date yields a
/// negative (or zero) count.
pub fn whole_years(birth: NaiveDate, as_of: NaiveDateTime) -> i32 {
    let as_of = as_of.date();
    match as_of.years_since(birth) {
        Some(years) => years as i32,
        None => birth.years_since(as_of).map_or(0, |years| -(years as i32)),
    }
}

/// Day of month with the coordination offset removed.
fn calendar_day(day: u32) -> u32 {
    if day > COORDINATION_NUMBER_OFFSET {
        day - COORDINATION_NUMBER_OFFSET
    } else {
        day
    }
}

/// The civil date `year-month-day`, rolling day overflow into later months.
fn civil_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("month is validated to 1..=12 when the personnummer is parsed");
    first + Days::new(u64::from(day.saturating_sub(1)))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::checksum;
    use proptest::prelude::*;

    /// Valid 10-digit numbers without separator: (yy, mm, dd, serial, coordination).
    fn ten_digit_number() -> impl Strategy<Value = (u32, u32, u32, u32, bool)> {
        (0u32..100, 1u32..=12, 1u32..=28, 0u32..1000, any::<bool>())
    }

    fn render(yy: u32, mm: u32, dd: u32, serial: u32, coordination: bool) -> String {
        let day = if coordination { dd + COORDINATION_NUMBER_OFFSET } else { dd };
        let data = format!("{yy:02}{mm:02}{day:02}{serial:03}");
        let c = checksum::check_digit(&data).unwrap();
        format!("{data}{c}")
    }

    proptest! {
        /// Coordination numbers resolve to the day minus 60.
        #[test]
        fn coordination_day_property((yy, mm, dd, serial, _) in ten_digit_number()) {
            let pnr = Personnummer::parse(&render(yy, mm, dd, serial, true)).unwrap();
            let dob = resolve_birth_date(&pnr, NaiveDate::from_ymd_opt(2015, 6, 23).unwrap().and_time(NaiveTime::MIN));
            prop_assert_eq!(dob.day(), dd);
        }

        /// Without century or separator the year is the current-century reading,
        /// or exactly 100 less when that reading is not strictly in the past.
        #[test]
        fn century_property(
            (yy, mm, dd, serial, coordination) in ten_digit_number(),
            now_days in 0i64..(365 * 200),
        ) {
            let now = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap().and_time(NaiveTime::MIN)
                + chrono::Duration::days(now_days);
            let pnr = Personnummer::parse(&render(yy, mm, dd, serial, coordination)).unwrap();
            let dob = resolve_birth_date(&pnr, now);

            let naive_year = now.year().div_euclid(100) * 100 + yy as i32;
            let naive = NaiveDate::from_ymd_opt(naive_year, mm, dd).unwrap();
            if naive.and_time(NaiveTime::MIN) < now {
                prop_assert_eq!(dob.year(), naive_year);
            } else {
                prop_assert_eq!(dob.year(), naive_year - 100);
            }
            prop_assert!(dob.and_time(NaiveTime::MIN) < now);
        }
    }
}
