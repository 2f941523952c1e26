//! # Invocation Context
//!
//! Global options shared by every subcommand: the clock an invocation runs
//! against and the output mode.

use anyhow::{Context as _, Result};
use pnr_core::{Clock, FixedClock, SystemClock};
use serde::Serialize;

/// Resolved global options for one `pnr` invocation.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// "Now" for the whole invocation, frozen at startup so that every
    /// value printed by one command is computed against the same instant.
    pub clock: FixedClock,
    /// Emit JSON instead of human-readable text.
    pub json: bool,
}

impl Context {
    /// Build the context from the raw `--now` value (if any).
    ///
    /// # Errors
    ///
    /// Fails if `now` is present but is not a date or date-time.
    pub fn new(now: Option<&str>, json: bool) -> Result<Self> {
        let clock = match now {
            Some(raw) => FixedClock::parse(raw)
                .with_context(|| format!("invalid --now value {raw:?}"))?,
            None => FixedClock(SystemClock.now()),
        };
        tracing::debug!(now = %clock.now(), json, "resolved invocation context");
        Ok(Self { clock, json })
    }

    /// Print `value` as pretty JSON, or the `human` rendering otherwise.
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce(&T) -> String) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", human(value));
        }
        Ok(())
    }
}
