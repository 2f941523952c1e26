//! # Generate Subcommand
//!
//! Synthesizes a valid 10-digit number for a birth date and serial.

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::Args;
use pnr_core::{generate_with, FORMAT_MODERN, FORMAT_TRADITIONAL};
use serde::Serialize;

use crate::Context;

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Birth date (`YYYY-MM-DD`).
    pub birth_date: NaiveDate,

    /// Serial, 1 to 3 digits (zero padded).
    #[arg(long, default_value = pnr_core::DEFAULT_SERIAL)]
    pub serial: String,

    /// Print the coordination-number form (day + 60).
    #[arg(long)]
    pub coordination: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub personnummer: String,
    pub traditional: String,
    pub modern: String,
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, ctx: &Context) -> Result<u8> {
    let pnr = generate_with(args.birth_date, Some(&args.serial), &ctx.clock)
        .with_context(|| format!("cannot generate a personnummer for {}", args.birth_date))?;

    let pnr = if args.coordination {
        pnr.to_coordination_number()
            .context("cannot encode a coordination number")?
    } else {
        pnr
    };

    let report = GenerateReport {
        personnummer: pnr.as_str().to_string(),
        traditional: pnr.format_with(FORMAT_TRADITIONAL, &ctx.clock),
        modern: pnr.format_with(FORMAT_MODERN, &ctx.clock),
    };
    ctx.emit(&report, |r| r.traditional.clone())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::new(Some("2015-06-23"), false).unwrap()
    }

    #[test]
    fn coordination_adds_sixty_to_day() {
        let pnr = generate_with(
            NaiveDate::from_ymd_opt(1964, 8, 23).unwrap(),
            Some("323"),
            &ctx().clock,
        )
        .unwrap();
        let c = pnr.to_coordination_number().unwrap();
        assert_eq!(c.as_str(), "6408833231");
        assert_eq!(c.date_of_birth_with(&ctx().clock), pnr.date_of_birth_with(&ctx().clock));
    }

    #[test]
    fn coordination_flag_succeeds() {
        let args = GenerateArgs {
            birth_date: NaiveDate::from_ymd_opt(1964, 8, 23).unwrap(),
            serial: "323".into(),
            coordination: true,
        };
        assert_eq!(run_generate(&args, &ctx()).unwrap(), 0);
    }

    #[test]
    fn invalid_serial_is_an_error() {
        let args = GenerateArgs {
            birth_date: NaiveDate::from_ymd_opt(1964, 8, 23).unwrap(),
            serial: "12345".into(),
            coordination: false,
        };
        assert!(run_generate(&args, &ctx()).is_err());
    }

    #[test]
    fn future_birth_date_is_an_error() {
        let args = GenerateArgs {
            birth_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            serial: "000".into(),
            coordination: false,
        };
        let err = run_generate(&args, &ctx()).unwrap_err();
        assert!(err.to_string().contains("2020-01-01"));
    }
}
