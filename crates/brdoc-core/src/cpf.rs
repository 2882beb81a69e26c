//! # CPF — Cadastro de Pessoas Físicas
//!
//! The 11-digit Brazilian individual taxpayer number: nine base digits
//! followed by two modulo-11 check digits computed with
//! [`DescendingWeights`]. The ninth digit (index 8) encodes the fiscal
//! region that issued the number (see [`crate::uf`]).
//!
//! ## Validation
//!
//! - Exactly 11 characters
//! - Digits only
//! - Both check digits match, first one checked first
//!
//! A [`Cpf`] can only be obtained through [`validate`] (or the `FromStr`,
//! `TryFrom` and `Deserialize` impls, which call it) and [`generate`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::check_digit::{CheckDigitScheme, DescendingWeights};
use crate::document::{
    ensure_length, generation_defect, push_check_digits, random_string, values,
    verify_check_digits, NUMERIC_CHARSET,
};
use crate::error::DocumentError;
use crate::uf::{FiscalRegion, Uf};

/// Characters in a complete CPF.
pub const CPF_LENGTH: usize = 11;

/// Characters in a CPF base (without check digits).
pub const CPF_BASE_LENGTH: usize = 9;

/// Index of the fiscal region digit.
const REGION_INDEX: usize = 8;

/// A validated CPF, stored as its 11 raw digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Access the raw 11-digit value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the CPF, returning the raw 11-digit string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Render as `DDD.DDD.DDD-DD`.
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..]
        )
    }

    /// The two check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[CPF_BASE_LENGTH..]
    }

    /// The fiscal region that issued this CPF.
    pub fn region(&self) -> &'static FiscalRegion {
        FiscalRegion::for_ascii_digit(self.0.as_bytes()[REGION_INDEX])
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(value)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = DocumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate(value)
    }
}

/// Validate a raw CPF string.
///
/// The string is moved into the returned [`Cpf`] unchanged: no trimming,
/// no punctuation stripping.
///
/// # Errors
///
/// [`DocumentError::InvalidLength`], [`DocumentError::InvalidChars`] or
/// [`DocumentError::InvalidCheckDigits`], checked in that order.
pub fn validate(value: impl Into<String>) -> Result<Cpf, DocumentError> {
    let value = value.into();
    check(&value).map_err(|err| {
        tracing::trace!(error = %err, "CPF rejected");
        err
    })?;
    Ok(Cpf(value))
}

fn check(value: &str) -> Result<(), DocumentError> {
    ensure_length(value, CPF_LENGTH)?;
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DocumentError::InvalidChars);
    }
    verify_check_digits(&DescendingWeights, value, CPF_BASE_LENGTH)
}

/// Compute the two check digits for a 9-digit CPF base.
///
/// # Errors
///
/// [`DocumentError::InvalidLength`] unless the base has 9 characters,
/// [`DocumentError::InvalidChars`] unless they are all digits.
pub fn calculate_check_digits(base: &str) -> Result<[u8; 2], DocumentError> {
    ensure_length(base, CPF_BASE_LENGTH)?;
    if !base.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DocumentError::InvalidChars);
    }
    Ok(DescendingWeights.check_digits(&values(base)))
}

/// Options for [`generate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpfGenerateOptions {
    /// Force the region digit to the one serving this UF.
    pub uf: Option<Uf>,
}

/// Generate a random valid CPF using the thread-local RNG.
pub fn generate(options: &CpfGenerateOptions) -> Cpf {
    generate_with_rng(options, &mut rand::thread_rng())
}

/// Generate a random valid CPF from the given RNG.
///
/// Without a UF all nine base digits are random. With one, the first eight
/// are random and the ninth is the UF's region digit.
pub fn generate_with_rng<R: Rng + ?Sized>(options: &CpfGenerateOptions, rng: &mut R) -> Cpf {
    let mut base = match options.uf {
        Some(uf) => {
            let mut base = random_string(rng, REGION_INDEX, NUMERIC_CHARSET);
            base.push(uf.region_digit());
            base
        }
        None => random_string(rng, CPF_BASE_LENGTH, NUMERIC_CHARSET),
    };

    let digits =
        calculate_check_digits(&base).unwrap_or_else(|err| generation_defect("CPF", &base, err));
    push_check_digits(&mut base, digits);

    tracing::debug!(uf = ?options.uf, "generated CPF");
    Cpf(base)
}

/// Display information extracted from a validated CPF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpfInfo {
    /// The CPF itself.
    pub value: Cpf,
    /// `DDD.DDD.DDD-DD`.
    pub formatted: String,
    /// Issuing fiscal region.
    pub region: &'static FiscalRegion,
}

/// Extract display information from a validated CPF.
pub fn extract_info(cpf: &Cpf) -> CpfInfo {
    CpfInfo {
        value: cpf.clone(),
        formatted: cpf.formatted(),
        region: cpf.region(),
    }
}
