//! # Age Subcommand

use anyhow::{Context as _, Result};
use clap::Args;
use pnr_core::{Clock, FixedClock, Personnummer};
use serde::Serialize;

use crate::Context;

/// Arguments for the age subcommand.
#[derive(Args, Debug)]
pub struct AgeArgs {
    /// The number whose age to compute.
    pub number: String,

    /// Compute the age at this date instead of now (`YYYY-MM-DD`).
    #[arg(long)]
    pub as_of: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeReport {
    pub input: String,
    pub as_of: String,
    pub age: i32,
}

/// Execute the age subcommand.
///
/// The birth date is always resolved against the invocation clock; `--as-of`
/// only moves the instant the age is measured at.
pub fn run_age(args: &AgeArgs, ctx: &Context) -> Result<u8> {
    let pnr = Personnummer::parse(&args.number).context("cannot compute age")?;
    let as_of = match &args.as_of {
        Some(raw) => FixedClock::parse(raw)
            .with_context(|| format!("invalid --as-of value {raw:?}"))?
            .now(),
        None => ctx.clock.now(),
    };

    let birth = pnr.date_of_birth_with(&ctx.clock);
    let report = AgeReport {
        input: args.number.clone(),
        as_of: as_of.date().to_string(),
        age: pnr_core::century::whole_years(birth, as_of),
    };
    ctx.emit(&report, |r| r.age.to_string())?;
    Ok(0)
}
