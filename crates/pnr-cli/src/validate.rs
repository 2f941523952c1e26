//! # Validate Subcommand
//!
//! Checks each argument and reports `valid` / `invalid`. Exits 0 only if
//! every input is valid.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::Context;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Numbers to check.
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

/// Outcome for a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub input: String,
    pub valid: bool,
}

/// Validate every input, preserving order.
pub fn check_all(numbers: &[String]) -> Vec<ValidationReport> {
    numbers
        .iter()
        .map(|n| ValidationReport {
            input: n.clone(),
            valid: pnr_core::is_valid(n),
        })
        .collect()
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, ctx: &Context) -> Result<u8> {
    let reports = check_all(&args.numbers);
    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(total = reports.len(), invalid, "validated numbers");

    ctx.emit(&reports, |reports| {
        reports
            .iter()
            .map(|r| format!("{}: {}", r.input, if r.valid { "valid" } else { "invalid" }))
            .collect::<Vec<_>>()
            .join("\n")
    })?;

    Ok(if invalid == 0 { 0 } else { 1 })
}
