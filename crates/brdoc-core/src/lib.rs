//! # brdoc-core — Brazilian Fiscal Identifiers
//!
//! Validation, check-digit computation, random generation and formatting
//! for the two Brazilian taxpayer identifiers:
//!
//! - **CPF** ([`Cpf`]): 11 digits, individuals.
//! - **CNPJ** ([`Cnpj`]): 14 characters, legal entities. Since the 2026
//!   numbering change the first 12 characters may be uppercase letters.
//!
//! Both end in two modulo-11 check digits. The schemes share one trait
//! ([`CheckDigitScheme`]) and differ in how weights are assigned; the CNPJ
//! scheme draws its weights from a [`WeightCycle`].
//!
//! ## Key Design Principles
//!
//! 1. **Validated newtypes.** [`Cpf`] and [`Cnpj`] have private fields. The
//!    only ways to get one are validation (including `FromStr`, `TryFrom`
//!    and serde `Deserialize`) and generation, so holding one proves the
//!    check digits were verified.
//!
//! 2. **Errors are values.** Every expected failure is a [`DocumentError`],
//!    reported in a fixed order: length, charset, check digits.
//!
//! 3. **Pure functions.** No I/O and no shared mutable state. Each
//!    check-digit computation owns its own cursor.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests, except for invariants
//!   established at construction and documented caller preconditions.
//! - Document values are never logged; only error kinds are.

/// Implement `Deserialize` for a validated string newtype by deserializing
/// a plain `String` and routing it through the type's `FromStr`, so
/// invalid values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod check_digit;
pub mod cnpj;
pub mod cpf;
pub mod cycle;
mod document;
pub mod error;
pub mod uf;

// Re-export primary types for ergonomic imports.
pub use check_digit::{CheckDigitScheme, CyclicWeights, DescendingWeights, CNPJ_WEIGHTS};
pub use cnpj::{Cnpj, CnpjGenerateOptions, CnpjInfo, ValidateOptions};
pub use cpf::{Cpf, CpfGenerateOptions, CpfInfo};
pub use cycle::WeightCycle;
pub use error::{DocumentError, UnknownUf};
pub use uf::{FiscalRegion, Uf, FISCAL_REGIONS};
