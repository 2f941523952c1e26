//! # Inspect Subcommand
//!
//! Prints every stored field of a number together with the values derived
//! from the invocation clock.

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::Args;
use pnr_core::{Clock, Personnummer, Separator, FORMAT_MODERN, FORMAT_TRADITIONAL};
use serde::Serialize;

use crate::Context;

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The number to inspect.
    pub number: String,
}

/// Stored fields and derived values of one number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub input: String,
    pub century: Option<String>,
    pub year: String,
    pub month: String,
    pub day: String,
    pub separator: Separator,
    pub serial: String,
    pub check_digit: String,
    pub coordination_number: bool,
    pub date_of_birth: NaiveDate,
    pub age: i32,
    pub traditional: String,
    pub modern: String,
}

/// Build the report for `pnr` against `clock`.
pub fn inspect(pnr: &Personnummer, clock: &impl Clock) -> InspectReport {
    InspectReport {
        input: pnr.as_str().to_string(),
        century: pnr.century().map(str::to_string),
        year: pnr.year().to_string(),
        month: pnr.month().to_string(),
        day: pnr.day().to_string(),
        separator: pnr.separator_with(clock),
        serial: pnr.serial().to_string(),
        check_digit: pnr.check_digit().to_string(),
        coordination_number: pnr.is_coordination_number(),
        date_of_birth: pnr.date_of_birth_with(clock),
        age: pnr.age_with(clock),
        traditional: pnr.format_with(FORMAT_TRADITIONAL, clock),
        modern: pnr.format_with(FORMAT_MODERN, clock),
    }
}

fn render(r: &InspectReport) -> String {
    let mut lines = vec![format!("Personnummer: {}", r.input)];
    lines.push(format!("  Traditional:   {}", r.traditional));
    lines.push(format!("  Modern:        {}", r.modern));
    lines.push(format!("  Date of birth: {}", r.date_of_birth));
    lines.push(format!("  Age:           {}", r.age));
    lines.push(format!("  Separator:     {}", r.separator));
    lines.push(format!("  Serial:        {}", r.serial));
    lines.push(format!("  Check digit:   {}", r.check_digit));
    if r.coordination_number {
        lines.push("  Coordination number (day field includes +60)".to_string());
    }
    lines.join("\n")
}

/// Execute the inspect subcommand.
pub fn run_inspect(args: &InspectArgs, ctx: &Context) -> Result<u8> {
    let pnr = Personnummer::parse(&args.number).context("cannot inspect")?;
    ctx.emit(&inspect(&pnr, &ctx.clock), render)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnr_core::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::at_date(NaiveDate::from_ymd_opt(2015, 6, 23).unwrap())
    }

    #[test]
    fn report_for_coordination_number() {
        let pnr = Personnummer::parse("19640883+3231").unwrap();
        let r = inspect(&pnr, &clock());
        assert_eq!(r.century.as_deref(), Some("19"));
        assert_eq!(r.day, "83");
        assert_eq!(r.separator, Separator::Plus);
        assert!(r.coordination_number);
        assert_eq!(r.date_of_birth, NaiveDate::from_ymd_opt(1864, 8, 23).unwrap());
        assert_eq!(r.age, 150);
        assert_eq!(r.traditional, "640883+3231");
        assert_eq!(r.modern, "186408833231");
    }

    #[test]
    fn report_serializes_to_json() {
        let pnr = Personnummer::parse("640823-3234").unwrap();
        let json = serde_json::to_value(inspect(&pnr, &clock())).unwrap();
        assert_eq!(json["date_of_birth"], "1964-08-23");
        assert_eq!(json["separator"], "-");
        assert_eq!(json["age"], 50);
        assert!(json["century"].is_null());
    }

    #[test]
    fn human_rendering_mentions_birth_date() {
        let pnr = Personnummer::parse("640883-3231").unwrap();
        let text = render(&inspect(&pnr, &clock()));
        assert!(text.contains("Date of birth: 1964-08-23"));
        assert!(text.contains("Coordination number"));
    }
}
