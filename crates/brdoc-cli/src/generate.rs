//! # Generate Subcommand
//!
//! `brdoc generate <cpf|cnpj>` prints random valid documents, one per line.
//! Output is synthetic test data. `--seed` makes a run reproducible.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use brdoc_core::{cnpj, cpf, CnpjGenerateOptions, CpfGenerateOptions, Uf};

use crate::DocumentKind;

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Document kind.
    pub kind: DocumentKind,

    /// CPF only: issue from the fiscal region serving this UF (e.g. SP).
    #[arg(long)]
    pub uf: Option<Uf>,

    /// CNPJ only: draw uppercase letters as well as digits.
    #[arg(long)]
    pub letters: bool,

    /// CNPJ only: randomize the branch segment instead of using 0001.
    #[arg(long)]
    pub randomize_branch: bool,

    /// Number of documents to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,

    /// Print in punctuated form.
    #[arg(long)]
    pub formatted: bool,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Generate `args.count` documents as strings.
pub fn generate_documents(args: &GenerateArgs, rng: &mut dyn RngCore) -> Result<Vec<String>> {
    match args.kind {
        DocumentKind::Cpf => {
            if args.letters || args.randomize_branch {
                bail!("--letters and --randomize-branch apply to CNPJ only");
            }
            let options = CpfGenerateOptions { uf: args.uf };
            Ok((0..args.count)
                .map(|_| render(cpf::generate_with_rng(&options, &mut *rng), args.formatted))
                .collect())
        }
        DocumentKind::Cnpj => {
            if args.uf.is_some() {
                bail!("--uf applies to CPF only");
            }
            let options = CnpjGenerateOptions {
                only_numbers: !args.letters,
                randomize_branch: args.randomize_branch,
            };
            Ok((0..args.count)
                .map(|_| render(cnpj::generate_with_rng(&options, &mut *rng), args.formatted))
                .collect())
        }
    }
}

fn render<D: AsRef<str> + std::fmt::Display>(doc: D, formatted: bool) -> String {
    if formatted {
        doc.to_string()
    } else {
        doc.as_ref().to_string()
    }
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs, out: &mut dyn Write) -> Result<u8> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let documents = generate_documents(args, &mut rng)?;
    tracing::info!(kind = %args.kind, count = documents.len(), "generated documents");

    for doc in documents {
        writeln!(out, "{doc}")?;
    }
    Ok(0)
}
