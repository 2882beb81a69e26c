//! # Validate Subcommand
//!
//! `brdoc validate <cpf|cnpj> <VALUE>` checks length, charset and check
//! digits. Prints the formatted document on success and the error code on
//! rejection.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use brdoc_core::{cnpj, cpf, DocumentError, ValidateOptions};

use crate::{DocumentKind, EXIT_REJECTED};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document kind.
    pub kind: DocumentKind,

    /// Raw value, without punctuation.
    pub value: String,

    /// CNPJ only: reject letters (legacy all-digit format).
    #[arg(long)]
    pub only_numbers: bool,

    /// Emit a JSON object instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Validate `value` as `kind`, returning the formatted form.
pub fn validate_formatted(
    kind: DocumentKind,
    value: &str,
    only_numbers: bool,
) -> Result<String, DocumentError> {
    match kind {
        DocumentKind::Cpf => cpf::validate(value).map(|doc| doc.formatted()),
        DocumentKind::Cnpj => {
            cnpj::validate(value, &ValidateOptions { only_numbers }).map(|doc| doc.formatted())
        }
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, out: &mut dyn Write) -> Result<u8> {
    if args.only_numbers && args.kind == DocumentKind::Cpf {
        tracing::warn!("--only-numbers has no effect on CPF");
    }

    let outcome = validate_formatted(args.kind, &args.value, args.only_numbers);
    tracing::info!(kind = %args.kind, valid = outcome.is_ok(), "validated");

    let code = match &outcome {
        Ok(_) => 0,
        Err(_) => EXIT_REJECTED,
    };

    if args.json {
        let body = match outcome {
            Ok(formatted) => json!({
                "valid": true,
                "value": args.value,
                "formatted": formatted,
            }),
            Err(err) => json!({
                "valid": false,
                "error": err.code(),
                "message": err.to_string(),
            }),
        };
        serde_json::to_writer(&mut *out, &body).context("writing JSON output")?;
        writeln!(out)?;
    } else {
        match outcome {
            Ok(formatted) => writeln!(out, "valid {} {formatted}", args.kind)?,
            Err(err) => writeln!(out, "invalid {}: {} ({err})", args.kind, err.code())?,
        }
    }

    Ok(code)
}
