//! Validation and generation steps shared by [`crate::cpf`] and
//! [`crate::cnpj`].

use rand::Rng;

use crate::check_digit::{char_value, CheckDigitScheme};
use crate::error::DocumentError;

/// Characters drawn from when generating numeric documents.
pub(crate) const NUMERIC_CHARSET: &[u8] = b"0123456789";

/// Characters drawn from when generating alphanumeric CNPJs.
pub(crate) const ALPHANUMERIC_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Reject `value` unless it has exactly `expected` characters.
///
/// Counts `char`s rather than bytes so that a multi-byte character is
/// reported as a charset problem, not a length problem.
pub(crate) fn ensure_length(value: &str, expected: usize) -> Result<(), DocumentError> {
    let actual = value.chars().count();
    if actual != expected {
        return Err(DocumentError::InvalidLength { expected, actual });
    }
    Ok(())
}

/// Numeric values of every character in an ASCII document string.
pub(crate) fn values(value: &str) -> Vec<u8> {
    value.chars().map(char_value).collect()
}

/// Compare the two trailing characters of `value` against the check digits
/// computed over the first `base_len` characters.
///
/// The second digit is only computed once the first one matches.
pub(crate) fn verify_check_digits<S: CheckDigitScheme>(
    scheme: &S,
    value: &str,
    base_len: usize,
) -> Result<(), DocumentError> {
    let digits = values(value);

    if scheme.check_digit(&digits[..base_len]) != digits[base_len] {
        return Err(DocumentError::InvalidCheckDigits);
    }
    if scheme.check_digit(&digits[..base_len + 1]) != digits[base_len + 1] {
        return Err(DocumentError::InvalidCheckDigits);
    }
    Ok(())
}

/// `len` characters picked uniformly from `charset`.
pub(crate) fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize, charset: &[u8]) -> String {
    (0..len)
        .map(|_| char::from(charset[rng.gen_range(0..charset.len())]))
        .collect()
}

/// Append two check digits to `base`.
pub(crate) fn push_check_digits(base: &mut String, [first, second]: [u8; 2]) {
    base.push(char::from(b'0' + first));
    base.push(char::from(b'0' + second));
}

/// A freshly generated base failed its own check-digit computation. This
/// is a bug in the generator, not an input problem.
#[cold]
pub(crate) fn generation_defect(kind: &str, base: &str, err: DocumentError) -> ! {
    tracing::error!(kind, base, error = %err, "generated base rejected by check-digit computation");
    panic!("generated {kind} base {base:?} rejected: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check_digit::DescendingWeights;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn length_counts_chars_not_bytes() {
        // 'é' is two bytes
        assert!(ensure_length("1234567890é", 11).is_ok());
        assert_eq!(
            ensure_length("123", 11),
            Err(DocumentError::InvalidLength {
                expected: 11,
                actual: 3
            })
        );
    }

    #[test]
    fn random_string_uses_charset() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = random_string(&mut rng, 64, b"AB");
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c == 'A' || c == 'B'));
        assert!(random_string(&mut rng, 0, NUMERIC_CHARSET).is_empty());
    }

    #[test]
    fn verify_rejects_either_digit() {
        assert!(verify_check_digits(&DescendingWeights, "43378073225", 9).is_ok());
        assert_eq!(
            verify_check_digits(&DescendingWeights, "43378073215", 9),
            Err(DocumentError::InvalidCheckDigits)
        );
        assert_eq!(
            verify_check_digits(&DescendingWeights, "43378073224", 9),
            Err(DocumentError::InvalidCheckDigits)
        );
    }

    #[test]
    fn push_appends_ascii_digits() {
        let mut base = String::from("433780732");
        push_check_digits(&mut base, [2, 5]);
        assert_eq!(base, "43378073225");
    }
}
