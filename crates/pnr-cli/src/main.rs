//! # pnr CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pnr_cli::age::{run_age, AgeArgs};
use pnr_cli::format::{run_format, FormatArgs};
use pnr_cli::generate::{run_generate, GenerateArgs};
use pnr_cli::inspect::{run_inspect, InspectArgs};
use pnr_cli::validate::{run_validate, ValidateArgs};
use pnr_cli::Context;

/// Swedish personal identity numbers: validate, format, inspect, generate.
#[derive(Parser, Debug)]
#[command(name = "pnr", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Treat this instant as "now" (`YYYY-MM-DD` or RFC 3339).
    #[arg(long, env = "PNR_NOW", global = true)]
    now: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether numbers are valid.
    Validate(ValidateArgs),

    /// Format a number with a template.
    Format(FormatArgs),

    /// Show every field and derived value of a number.
    Inspect(InspectArgs),

    /// Age in whole years.
    Age(AgeArgs),

    /// Generate a valid number for a birth date.
    Generate(GenerateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.json) {
        eprintln!("failed to install log subscriber: {e}");
    }

    let result = Context::new(cli.now.as_deref(), cli.json).and_then(|ctx| match &cli.command {
        Commands::Validate(args) => run_validate(args, &ctx),
        Commands::Format(args) => run_format(args, &ctx),
        Commands::Inspect(args) => run_inspect(args, &ctx),
        Commands::Age(args) => run_age(args, &ctx),
        Commands::Generate(args) => run_generate(args, &ctx),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// Install the stderr subscriber. `-v` counts raise the level; `--json`
/// switches diagnostics to one JSON object per line.
fn init_logging(
    verbose: u8,
    json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}
