//! # Error Types
//!
//! Errors surfaced by `brdoc-core`. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations and are returned as
//! values. Nothing in this crate panics on bad input.
//!
//! ## Ordering
//!
//! Document validation reports exactly one [`DocumentError`], checked in a
//! fixed order: length, then charset, then the first check digit, then the
//! second.

use thiserror::Error;

/// Validation failure for a CPF or CNPJ value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentError {
    /// The input does not have the required number of characters.
    #[error("invalid length: expected {expected} characters, got {actual}")]
    InvalidLength {
        /// Required character count.
        expected: usize,
        /// Character count of the rejected input.
        actual: usize,
    },

    /// The input contains characters outside the permitted charset.
    #[error("invalid characters for this document kind")]
    InvalidChars,

    /// The trailing check digits do not match the computed ones.
    #[error("check digits do not match")]
    InvalidCheckDigits,
}

impl DocumentError {
    /// Stable kebab-case code for this error kind.
    ///
    /// These codes are part of the public contract and are printed by the
    /// CLI, so they must not change.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "invalid-length",
            Self::InvalidChars => "invalid-chars",
            Self::InvalidCheckDigits => "invalid-check-digits",
        }
    }
}

/// A string that is not one of the 27 UF codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown UF code: {0:?}")]
pub struct UnknownUf(pub String);
