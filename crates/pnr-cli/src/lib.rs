//! # pnr-cli: Command-Line Interface for `pnr-core`
//!
//! Provides the `pnr` binary.
//!
//! ## Subcommands
//!
//! - `pnr validate`: Check one or more numbers.
//! - `pnr format`: Expand a template for a number.
//! - `pnr inspect`: Show every field and derived value.
//! - `pnr age`: Age in whole years, today or at a given date.
//! - `pnr generate`: Synthesize a valid number for a birth date.
//!
//! ```bash
//! pnr validate 640823-3234 112233-4455
//! pnr format 640883-3231 --modern
//! pnr --now 2015-06-23 age 100623-8362
//! pnr --json inspect 19640883+3231
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live in one module per
//!   subcommand and return an exit code.
//! - Handlers delegate to `pnr-core`; no parsing rules are duplicated here.
//! - Results go to stdout, diagnostics to stderr through `tracing`.

pub mod age;
pub mod context;
pub mod format;
pub mod generate;
pub mod inspect;
pub mod validate;

pub use context::Context;
