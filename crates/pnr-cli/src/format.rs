//! # Format Subcommand
//!
//! Expands a template (traditional by default) for one number.

use anyhow::{Context as _, Result};
use clap::Args;
use pnr_core::{Personnummer, FORMAT_MODERN, FORMAT_TRADITIONAL};

use crate::Context;

/// Arguments for the format subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// The number to format.
    pub number: String,

    /// Custom template (tokens: yyyy yy mm dd - nnn x; `\` escapes).
    #[arg(long, conflicts_with_all = ["modern", "traditional"])]
    pub template: Option<String>,

    /// Use the 12-digit `yyyymmddnnnx` template.
    #[arg(long, conflicts_with = "traditional")]
    pub modern: bool,

    /// Use the 10-digit `yymmdd-nnnx` template (the default).
    #[arg(long)]
    pub traditional: bool,
}

impl FormatArgs {
    /// The template selected by the flags.
    pub fn template(&self) -> &str {
        match (&self.template, self.modern) {
            (Some(t), _) => t,
            (None, true) => FORMAT_MODERN,
            (None, false) => FORMAT_TRADITIONAL,
        }
    }
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs, ctx: &Context) -> Result<u8> {
    let pnr = Personnummer::parse(&args.number).context("cannot format")?;
    let formatted = pnr.format_with(args.template(), &ctx.clock);
    ctx.emit(&formatted, |s| s.clone())?;
    Ok(0)
}
