//! # CNPJ — Cadastro Nacional da Pessoa Jurídica
//!
//! The 14-character Brazilian legal-entity taxpayer number:
//!
//! ```text
//! 48.217.216/0001-30
//! └──┬─────┘ └┬─┘ └┬┘
//!   root   branch  check digits
//! ```
//!
//! Check digits use [`CyclicWeights`]. From 2026 the Receita Federal
//! issues alphanumeric CNPJs: the 12 leading characters may be uppercase
//! letters, whose value is their character code minus 48. The check digits
//! are always decimal. [`ValidateOptions::only_numbers`] restricts
//! validation to the legacy all-digit format.
//!
//! ## Validation
//!
//! - Exactly 14 characters
//! - Leading 12 in `[0-9A-Z]` (or `[0-9]` with `only_numbers`), last 2 digits
//! - Both check digits match, first one checked first

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::check_digit::{CheckDigitScheme, CyclicWeights};
use crate::document::{
    ensure_length, generation_defect, push_check_digits, random_string, values,
    verify_check_digits, ALPHANUMERIC_CHARSET, NUMERIC_CHARSET,
};
use crate::error::DocumentError;

/// Characters in a complete CNPJ.
pub const CNPJ_LENGTH: usize = 14;

/// Characters in a CNPJ base (without check digits).
pub const CNPJ_BASE_LENGTH: usize = 12;

/// Branch segment of a company's headquarters.
pub const HEADQUARTERS_BRANCH: &str = "0001";

const ROOT_LENGTH: usize = 8;

/// A validated CNPJ, stored as its 14 raw characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cnpj(String);

// Deserialization accepts the alphanumeric format.
impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Access the raw 14-character value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the CNPJ, returning the raw string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Render as `DD.DDD.DDD/DDDD-DD`.
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}/{}-{}",
            &self.0[..2],
            &self.0[2..5],
            &self.0[5..8],
            &self.0[8..12],
            &self.0[12..]
        )
    }

    /// The 8-character company root, shared by all branches.
    pub fn root(&self) -> &str {
        &self.0[..ROOT_LENGTH]
    }

    /// The 4-character branch segment.
    pub fn branch(&self) -> &str {
        &self.0[ROOT_LENGTH..CNPJ_BASE_LENGTH]
    }

    /// The two check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[CNPJ_BASE_LENGTH..]
    }

    /// Whether this is the headquarters (branch `0001`).
    pub fn is_headquarters(&self) -> bool {
        self.branch() == HEADQUARTERS_BRANCH
    }

    /// Whether this CNPJ uses the alphanumeric format.
    pub fn is_alphanumeric(&self) -> bool {
        self.0.bytes().any(|b| b.is_ascii_uppercase())
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Cnpj {
    type Err = DocumentError;

    /// Validate with default options (alphanumeric allowed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s, &ValidateOptions::default())
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(value, &ValidateOptions::default())
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate(value, &ValidateOptions::default())
    }
}

/// Options for [`validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateOptions {
    /// Accept only the legacy all-digit format.
    pub only_numbers: bool,
}

fn is_base_char(c: char, only_numbers: bool) -> bool {
    c.is_ascii_digit() || (!only_numbers && c.is_ascii_uppercase())
}

/// Validate a raw CNPJ string.
///
/// The string is moved into the returned [`Cnpj`] unchanged.
///
/// # Errors
///
/// [`DocumentError::InvalidLength`], [`DocumentError::InvalidChars`] or
/// [`DocumentError::InvalidCheckDigits`], checked in that order.
pub fn validate(
    value: impl Into<String>,
    options: &ValidateOptions,
) -> Result<Cnpj, DocumentError> {
    let value = value.into();
    check(&value, options).map_err(|err| {
        tracing::trace!(error = %err, only_numbers = options.only_numbers, "CNPJ rejected");
        err
    })?;
    Ok(Cnpj(value))
}

fn check(value: &str, options: &ValidateOptions) -> Result<(), DocumentError> {
    ensure_length(value, CNPJ_LENGTH)?;
    let charset_ok = value.chars().enumerate().all(|(i, c)| {
        if i < CNPJ_BASE_LENGTH {
            is_base_char(c, options.only_numbers)
        } else {
            c.is_ascii_digit()
        }
    });
    if !charset_ok {
        return Err(DocumentError::InvalidChars);
    }
    verify_check_digits(&CyclicWeights, value, CNPJ_BASE_LENGTH)
}

/// Compute the two check digits for a 12-character CNPJ base.
///
/// Letters are accepted in every position of the base.
///
/// # Errors
///
/// [`DocumentError::InvalidLength`] unless the base has 12 characters,
/// [`DocumentError::InvalidChars`] unless they are all in `[0-9A-Z]`.
pub fn calculate_check_digits(base: &str) -> Result<[u8; 2], DocumentError> {
    ensure_length(base, CNPJ_BASE_LENGTH)?;
    if !base.chars().all(|c| is_base_char(c, false)) {
        return Err(DocumentError::InvalidChars);
    }
    Ok(CyclicWeights.check_digits(&values(base)))
}

/// Options for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CnpjGenerateOptions {
    /// Draw only digits. When `false`, uppercase letters are drawn too.
    pub only_numbers: bool,
    /// Randomize the branch segment instead of fixing it to `0001`.
    pub randomize_branch: bool,
}

impl Default for CnpjGenerateOptions {
    fn default() -> Self {
        Self {
            only_numbers: true,
            randomize_branch: false,
        }
    }
}

/// Generate a random valid CNPJ using the thread-local RNG.
pub fn generate(options: &CnpjGenerateOptions) -> Cnpj {
    generate_with_rng(options, &mut rand::thread_rng())
}

/// Generate a random valid CNPJ from the given RNG.
pub fn generate_with_rng<R: Rng + ?Sized>(options: &CnpjGenerateOptions, rng: &mut R) -> Cnpj {
    let charset = if options.only_numbers {
        NUMERIC_CHARSET
    } else {
        ALPHANUMERIC_CHARSET
    };

    let mut base = if options.randomize_branch {
        random_string(rng, CNPJ_BASE_LENGTH, charset)
    } else {
        let mut base = random_string(rng, ROOT_LENGTH, charset);
        base.push_str(HEADQUARTERS_BRANCH);
        base
    };

    let digits =
        calculate_check_digits(&base).unwrap_or_else(|err| generation_defect("CNPJ", &base, err));
    push_check_digits(&mut base, digits);

    tracing::debug!(
        only_numbers = options.only_numbers,
        randomize_branch = options.randomize_branch,
        "generated CNPJ"
    );
    Cnpj(base)
}

/// Display information extracted from a validated CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CnpjInfo {
    /// The CNPJ itself.
    pub value: Cnpj,
    /// `DD.DDD.DDD/DDDD-DD`.
    pub formatted: String,
}

/// Extract display information from a validated CNPJ.
pub fn extract_info(cnpj: &Cnpj) -> CnpjInfo {
    CnpjInfo {
        value: cnpj.clone(),
        formatted: cnpj.formatted(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        /// Every generated CNPJ validates with the matching options.
        #[test]
        fn generated_always_valid(
            seed in any::<u64>(),
            only_numbers in any::<bool>(),
            randomize_branch in any::<bool>(),
        ) {
            let options = CnpjGenerateOptions { only_numbers, randomize_branch };
            let cnpj = generate_with_rng(&options, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(cnpj.as_str().len(), CNPJ_LENGTH);
            let validate_options = ValidateOptions { only_numbers };
            prop_assert!(validate(cnpj.as_str(), &validate_options).is_ok());
            if !randomize_branch {
                prop_assert_eq!(cnpj.branch(), HEADQUARTERS_BRANCH);
            }
        }

        /// Check digits are deterministic and always single decimal digits.
        #[test]
        fn check_digits_deterministic(base in "[0-9A-Z]{12}") {
            let a = calculate_check_digits(&base).unwrap();
            let b = calculate_check_digits(&base).unwrap();
            prop_assert_eq!(a, b);
            prop_assert!(a.iter().all(|d| *d <= 9));
        }

        /// Corrupting one check digit is always detected.
        #[test]
        fn single_digit_corruption_detected(base in "[0-9]{12}", bump in 1u8..10) {
            let [first, second] = calculate_check_digits(&base).unwrap();
            let mut corrupted = base.clone();
            push_check_digits(&mut corrupted, [first, (second + bump) % 10]);
            prop_assert_eq!(
                validate(corrupted, &ValidateOptions::default()),
                Err(DocumentError::InvalidCheckDigits)
            );
        }
    }
}
