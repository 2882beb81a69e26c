//! # Check-Digits Subcommand
//!
//! `brdoc check-digits <cpf|cnpj> <BASE>` prints the two check digits for
//! a 9-digit CPF base or a 12-character CNPJ base.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use brdoc_core::{cnpj, cpf, DocumentError};

use crate::{DocumentKind, EXIT_REJECTED};

/// Arguments for the check-digits subcommand.
#[derive(Args, Debug)]
pub struct CheckDigitsArgs {
    /// Document kind.
    pub kind: DocumentKind,

    /// Base without check digits (9 for CPF, 12 for CNPJ).
    pub base: String,

    /// Print the complete document (base followed by the digits).
    #[arg(long)]
    pub complete: bool,
}

/// Compute check digits for `base`.
pub fn compute(kind: DocumentKind, base: &str) -> Result<[u8; 2], DocumentError> {
    match kind {
        DocumentKind::Cpf => cpf::calculate_check_digits(base),
        DocumentKind::Cnpj => cnpj::calculate_check_digits(base),
    }
}

/// Execute the check-digits subcommand.
pub fn run_check_digits(args: &CheckDigitsArgs, out: &mut dyn Write) -> Result<u8> {
    match compute(args.kind, &args.base) {
        Ok([first, second]) => {
            if args.complete {
                writeln!(out, "{}{first}{second}", args.base)?;
            } else {
                writeln!(out, "{first}{second}")?;
            }
            Ok(0)
        }
        Err(err) => {
            tracing::debug!(kind = %args.kind, error = %err, "base rejected");
            writeln!(out, "invalid {} base: {} ({err})", args.kind, err.code())?;
            Ok(EXIT_REJECTED)
        }
    }
}
