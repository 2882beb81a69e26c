//! # brdoc-cli — Command-Line Interface for brdoc
//!
//! Provides the `brdoc` binary on top of `brdoc-core`.
//!
//! ## Subcommands
//!
//! - `brdoc validate` — Validate a CPF or CNPJ.
//! - `brdoc generate` — Generate random valid documents.
//! - `brdoc check-digits` — Compute check digits for a base.
//! - `brdoc info` — Validate and print formatted details.
//! - `brdoc regions` — Print the CPF fiscal region table.
//!
//! ```bash
//! brdoc validate cnpj 48217216000130
//! brdoc generate cpf --uf SP --count 5 --formatted
//! brdoc check-digits cpf 433780732
//! brdoc info cpf 43378073225 --json
//! ```
//!
//! ## Exit codes
//!
//! `0` success, `2` the input was rejected, `1` any other error.
//! Handlers write to the supplied writer so they can be tested without a
//! terminal; no business logic lives here.

pub mod check_digits;
pub mod generate;
pub mod info;
pub mod regions;
pub mod validate;

use clap::ValueEnum;

/// Exit code for input rejected by validation.
pub const EXIT_REJECTED: u8 = 2;

/// Which document a subcommand operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentKind {
    /// Individual taxpayer number (11 digits).
    Cpf,
    /// Legal-entity taxpayer number (14 characters).
    Cnpj,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpf => f.write_str("CPF"),
            Self::Cnpj => f.write_str("CNPJ"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_kind_display() {
        assert_eq!(DocumentKind::Cpf.to_string(), "CPF");
        assert_eq!(DocumentKind::Cnpj.to_string(), "CNPJ");
    }

    #[test]
    fn document_kind_value_names() {
        assert_eq!(
            DocumentKind::from_str("cpf", true).unwrap(),
            DocumentKind::Cpf
        );
        assert_eq!(
            DocumentKind::from_str("CNPJ", true).unwrap(),
            DocumentKind::Cnpj
        );
    }

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<check_digits::CheckDigitsArgs>();
        let _ = std::any::type_name::<generate::GenerateArgs>();
        let _ = std::any::type_name::<info::InfoArgs>();
        let _ = std::any::type_name::<regions::RegionsArgs>();
        let _ = std::any::type_name::<validate::ValidateArgs>();
    }
}
