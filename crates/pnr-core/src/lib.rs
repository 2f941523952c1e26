//! # pnr-core: Swedish Personal Identity Numbers
//!
//! Parsing, validation, formatting and generation of Swedish personal
//! identity numbers (*personnummer*) and coordination numbers
//! (*samordningsnummer*).
//!
//! ## Pipeline
//!
//! ```text
//! text -> grammar::match_fields -> checksum::is_valid -> Personnummer
//!                                                          |
//!                          century::resolve_birth_date <---+---> format::expand
//! ```
//!
//! 1. **Grammar**: fixed-width shape, optional century and separator.
//! 2. **Checksum**: Luhn-style mod 10 over `YYMMDDNNNC`.
//! 3. **Century**: full birth year from a two-digit year, a clock, and
//!    the `+` separator for subjects aged 100 or more.
//! 4. **Format**: `yyyy`/`yy`/`mm`/`dd`/`-`/`nnn`/`x` templates.
//! 5. **Generate**: the inverse: birth date and serial to a valid number.
//!
//! ## Time
//!
//! Nothing in a [`Personnummer`] depends on when it was parsed. Birth date,
//! age, and the displayed separator take a [`Clock`]; the plain variants
//! (`date_of_birth()`, `age()`, `Display`) use [`SystemClock`].
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests; `expect` only for invariants
//!   established when a `Personnummer` is parsed.
//! - Logging through `tracing` only; no subscriber is installed here.

pub mod century;
pub mod checksum;
pub mod clock;
pub mod error;
pub mod format;
pub mod generate;
pub mod grammar;
pub mod personnummer;

// Re-export primary types for ergonomic imports.
pub use clock::{clear_override, override_now, Clock, ClockOverride, FixedClock, SystemClock};
pub use error::PersonnummerError;
pub use format::{FORMAT_MODERN, FORMAT_TRADITIONAL};
pub use generate::{generate, generate_with, DEFAULT_SERIAL};
pub use personnummer::{
    age_of, date_of_birth_of, format_number, is_valid, Personnummer, Separator,
    COORDINATION_NUMBER_OFFSET,
};
