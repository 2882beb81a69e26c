//! # Modulo-11 Check Digits
//!
//! Both Brazilian fiscal identifiers end in two check digits (DVs) computed
//! the same way: a weighted sum of the preceding digit values, reduced as
//! `11 - (sum % 11)`, with any result above 9 replaced by 0. They differ
//! only in how weights are assigned to positions, which is the
//! [`CheckDigitScheme::weighted_residue`] seam:
//!
//! - [`DescendingWeights`] (CPF): position `i` of `L` digits gets `L + 1 - i`,
//!   so the last digit always weighs 2.
//! - [`CyclicWeights`] (CNPJ): weights come from the `[9, 8, 7, 6, 5, 4, 3, 2]`
//!   table, started mid-cycle so the last digit also weighs 2.
//!
//! The sum is reduced modulo 11 as it accumulates, so inputs of any length
//! stay within `u32`.
//!
//! The second DV is computed over the base followed by the first DV.

use crate::cycle::WeightCycle;

/// Weight table for the CNPJ scheme.
pub const CNPJ_WEIGHTS: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

/// Numeric value of a document character: its code minus the code of `'0'`.
///
/// Digits map to 0–9. Uppercase letters (CNPJ only) map to 17–42.
pub fn char_value(c: char) -> u8 {
    (c as u8).wrapping_sub(b'0')
}

/// A modulo-11 check-digit scheme parameterized by its weight assignment.
pub trait CheckDigitScheme {
    /// Weighted sum of `digits` modulo 11, in `0..11`.
    fn weighted_residue(&self, digits: &[u8]) -> u32;

    /// Check digit for `digits`, always in `0..=9`.
    fn check_digit(&self, digits: &[u8]) -> u8 {
        let dv = 11 - (self.weighted_residue(digits) % 11);
        if dv > 9 {
            0
        } else {
            dv as u8
        }
    }

    /// Both check digits for a base sequence.
    fn check_digits(&self, base: &[u8]) -> [u8; 2] {
        let mut digits = base.to_vec();
        let first = self.check_digit(&digits);
        digits.push(first);
        let second = self.check_digit(&digits);
        [first, second]
    }
}

/// CPF weights: descending from `len + 1` down to 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescendingWeights;

impl CheckDigitScheme for DescendingWeights {
    fn weighted_residue(&self, digits: &[u8]) -> u32 {
        // counted from the end, the k-th digit weighs k + 2
        digits
            .iter()
            .rev()
            .enumerate()
            .fold(0, |acc, (k, &d)| {
                let weight = (k % 11) as u32 + 2;
                (acc + weight * u32::from(d)) % 11
            })
    }
}

/// CNPJ weights: [`CNPJ_WEIGHTS`] cycled, aligned so the last digit gets 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclicWeights;

impl CheckDigitScheme for CyclicWeights {
    fn weighted_residue(&self, digits: &[u8]) -> u32 {
        let table_len = CNPJ_WEIGHTS.len();
        let offset = (table_len - digits.len() % table_len) as i64;
        // one cursor per computation
        let mut weights = WeightCycle::new(&CNPJ_WEIGHTS);
        weights.advance_by(offset);
        digits
            .iter()
            .fold(0, |acc, &d| (acc + weights.next_value() * u32::from(d)) % 11)
    }
}
