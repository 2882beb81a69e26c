//! # Info Subcommand
//!
//! `brdoc info <cpf|cnpj> <VALUE>` validates the value and prints what can
//! be read from it: the formatted form, and for a CPF the issuing fiscal
//! region; for a CNPJ the root, branch and format era.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use brdoc_core::{cnpj, cpf, DocumentError, ValidateOptions};

use crate::{DocumentKind, EXIT_REJECTED};

/// Arguments for the info subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
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

/// Validate and describe `value`, as JSON.
pub fn describe(
    kind: DocumentKind,
    value: &str,
    only_numbers: bool,
) -> Result<serde_json::Value, DocumentError> {
    match kind {
        DocumentKind::Cpf => {
            let info = cpf::extract_info(&cpf::validate(value)?);
            Ok(json!({
                "value": info.value,
                "formatted": info.formatted,
                "region": info.region,
            }))
        }
        DocumentKind::Cnpj => {
            let doc = cnpj::validate(value, &ValidateOptions { only_numbers })?;
            let info = cnpj::extract_info(&doc);
            Ok(json!({
                "value": info.value,
                "formatted": info.formatted,
                "root": doc.root(),
                "branch": doc.branch(),
                "headquarters": doc.is_headquarters(),
                "alphanumeric": doc.is_alphanumeric(),
            }))
        }
    }
}

fn write_text(
    kind: DocumentKind,
    value: &str,
    only_numbers: bool,
    out: &mut dyn Write,
) -> Result<u8> {
    match kind {
        DocumentKind::Cpf => match cpf::validate(value) {
            Ok(doc) => {
                let info = cpf::extract_info(&doc);
                let ufs: Vec<&str> = info.region.ufs.iter().map(|uf| uf.as_str()).collect();
                writeln!(out, "CPF        {}", info.value.as_str())?;
                writeln!(out, "formatted  {}", info.formatted)?;
                writeln!(out, "region     {} ({})", info.region.name, ufs.join(", "))?;
                Ok(0)
            }
            Err(err) => reject(kind, err, out),
        },
        DocumentKind::Cnpj => match cnpj::validate(value, &ValidateOptions { only_numbers }) {
            Ok(doc) => {
                let info = cnpj::extract_info(&doc);
                writeln!(out, "CNPJ       {}", info.value.as_str())?;
                writeln!(out, "formatted  {}", info.formatted)?;
                writeln!(out, "root       {}", doc.root())?;
                let role = if doc.is_headquarters() { "headquarters" } else { "branch" };
                writeln!(out, "branch     {} ({role})", doc.branch())?;
                Ok(0)
            }
            Err(err) => reject(kind, err, out),
        },
    }
}

fn reject(kind: DocumentKind, err: DocumentError, out: &mut dyn Write) -> Result<u8> {
    writeln!(out, "invalid {kind}: {} ({err})", err.code())?;
    Ok(EXIT_REJECTED)
}

/// Execute the info subcommand.
pub fn run_info(args: &InfoArgs, out: &mut dyn Write) -> Result<u8> {
    if !args.json {
        return write_text(args.kind, &args.value, args.only_numbers, out);
    }

    let (code, body) = match describe(args.kind, &args.value, args.only_numbers) {
        Ok(body) => (0, body),
        Err(err) => (
            EXIT_REJECTED,
            json!({ "error": err.code(), "message": err.to_string() }),
        ),
    };
    serde_json::to_writer_pretty(&mut *out, &body).context("writing JSON output")?;
    writeln!(out)?;
    Ok(code)
}
