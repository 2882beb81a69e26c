//! # brdoc CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brdoc_cli::check_digits::{run_check_digits, CheckDigitsArgs};
use brdoc_cli::generate::{run_generate, GenerateArgs};
use brdoc_cli::info::{run_info, InfoArgs};
use brdoc_cli::regions::{run_regions, RegionsArgs};
use brdoc_cli::validate::{run_validate, ValidateArgs};

/// brdoc — CPF and CNPJ toolkit.
///
/// Validates, generates and formats Brazilian taxpayer identifiers.
#[derive(Parser, Debug)]
#[command(name = "brdoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit log events as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a CPF or CNPJ.
    Validate(ValidateArgs),

    /// Generate random valid documents.
    Generate(GenerateArgs),

    /// Compute the check digits for a base.
    CheckDigits(CheckDigitsArgs),

    /// Validate a document and print its details.
    Info(InfoArgs),

    /// Print the CPF fiscal region table.
    Regions(RegionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "brdoc starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &mut out),
        Commands::Generate(args) => run_generate(&args, &mut out),
        Commands::CheckDigits(args) => run_check_digits(&args, &mut out),
        Commands::Info(args) => run_info(&args, &mut out),
        Commands::Regions(args) => run_regions(&args, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
