//! # Clock: the "current time" source
//!
//! Century resolution and age computation depend on "now". Rather than
//! reading the wall clock from deep inside the resolver, every
//! time-sensitive operation takes a [`Clock`]:
//!
//! - [`SystemClock`]: local wall-clock time.
//! - [`FixedClock`]: a frozen instant for deterministic callers and tests.
//!
//! ## Test hook
//!
//! [`override_now()`] freezes what [`SystemClock`] reports **on the calling
//! thread only** until the returned [`ClockOverride`] guard is dropped (or
//! [`clear_override()`] is called). Production code never needs it; tests
//! that exercise the convenience entry points (which use [`SystemClock`])
//! use it to pin "now" without leaking into parallel tests.
//!
//! All instants are naive local date-times: a personnummer encodes a civil
//! date without a time zone, so birth dates are compared against the
//! caller's local wall-clock reading.

use std::cell::Cell;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::error::PersonnummerError;

thread_local! {
    static OVERRIDE: Cell<Option<NaiveDateTime>> = const { Cell::new(None) };
}

/// A source of "now".
pub trait Clock {
    /// The current local date-time.
    fn now(&self) -> NaiveDateTime;
}

/// The real wall clock, honoring a thread-local [`override_now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        OVERRIDE
            .with(Cell::get)
            .unwrap_or_else(|| Local::now().naive_local())
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// A clock frozen at midnight on the given date.
    pub fn at_date(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN))
    }

    /// Parse an instant from text.
    ///
    /// Accepts, in order of preference:
    /// - a plain date (`2015-06-23`), meaning midnight;
    /// - a naive date-time (`2015-06-23T12:00:00`);
    /// - an RFC 3339 timestamp (`2015-06-23T12:00:00+02:00`), whose wall-clock
    ///   reading is kept as written.
    ///
    /// # Errors
    ///
    /// Returns [`PersonnummerError::InvalidInstant`] if none of the forms match.
    pub fn parse(s: &str) -> Result<Self, PersonnummerError> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::at_date(date));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Self(dt));
        }
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.naive_local()))
            .map_err(|_| PersonnummerError::InvalidInstant(s.to_string()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Guard returned by [`override_now()`]. Restores the previous override
/// (usually none) when dropped.
#[derive(Debug)]
#[must_use = "the override is cleared as soon as the guard is dropped"]
pub struct ClockOverride {
    previous: Option<NaiveDateTime>,
}

impl Drop for ClockOverride {
    fn drop(&mut self) {
        OVERRIDE.with(|cell| cell.set(self.previous));
    }
}

/// Freeze [`SystemClock`] at `instant` on the current thread.
pub fn override_now(instant: NaiveDateTime) -> ClockOverride {
    let previous = OVERRIDE.with(|cell| cell.replace(Some(instant)));
    tracing::trace!(%instant, "system clock overridden");
    ClockOverride { previous }
}

/// Drop any [`SystemClock`] override on the current thread.
pub fn clear_override() {
    OVERRIDE.with(|cell| cell.set(None));
}
