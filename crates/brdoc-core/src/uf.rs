//! # UF Codes and Fiscal Regions
//!
//! The 27 Brazilian federative units ([`Uf`]) and the ten fiscal regions
//! that partition them. The ninth digit of a CPF (index 8) identifies the
//! fiscal region where it was issued.
//!
//! | Digit | Region | UFs |
//! |-------|--------|-----|
//! | 1 | 1ª | DF, GO, MS, MT, TO |
//! | 2 | 2ª | AC, AM, AP, PA, RO, RR |
//! | 3 | 3ª | CE, MA, PI |
//! | 4 | 4ª | AL, PB, PE, RN |
//! | 5 | 5ª | BA, SE |
//! | 6 | 6ª | MG |
//! | 7 | 7ª | ES, RJ |
//! | 8 | 8ª | SP |
//! | 9 | 9ª | PR, SC |
//! | 0 | 10ª | RS |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UnknownUf;

/// A Brazilian federative unit (state or the Federal District).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Uf {
    /// Acre.
    Ac,
    /// Alagoas.
    Al,
    /// Amapá.
    Ap,
    /// Amazonas.
    Am,
    /// Bahia.
    Ba,
    /// Ceará.
    Ce,
    /// Distrito Federal.
    Df,
    /// Espírito Santo.
    Es,
    /// Goiás.
    Go,
    /// Maranhão.
    Ma,
    /// Mato Grosso.
    Mt,
    /// Mato Grosso do Sul.
    Ms,
    /// Minas Gerais.
    Mg,
    /// Pará.
    Pa,
    /// Paraíba.
    Pb,
    /// Paraná.
    Pr,
    /// Pernambuco.
    Pe,
    /// Piauí.
    Pi,
    /// Rio de Janeiro.
    Rj,
    /// Rio Grande do Norte.
    Rn,
    /// Rio Grande do Sul.
    Rs,
    /// Rondônia.
    Ro,
    /// Roraima.
    Rr,
    /// Santa Catarina.
    Sc,
    /// São Paulo.
    Sp,
    /// Sergipe.
    Se,
    /// Tocantins.
    To,
}

/// Number of federative units.
pub const UF_COUNT: usize = 27;

impl Uf {
    /// All 27 UFs, in the order the Receita Federal lists them.
    pub fn all() -> &'static [Uf] {
        &[
            Self::Ac,
            Self::Al,
            Self::Ap,
            Self::Am,
            Self::Ba,
            Self::Ce,
            Self::Df,
            Self::Es,
            Self::Go,
            Self::Ma,
            Self::Mt,
            Self::Ms,
            Self::Mg,
            Self::Pa,
            Self::Pb,
            Self::Pr,
            Self::Pe,
            Self::Pi,
            Self::Rj,
            Self::Rn,
            Self::Rs,
            Self::Ro,
            Self::Rr,
            Self::Sc,
            Self::Sp,
            Self::Se,
            Self::To,
        ]
    }

    /// Two-letter uppercase code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Ap => "AP",
            Self::Am => "AM",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mt => "MT",
            Self::Ms => "MS",
            Self::Mg => "MG",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pr => "PR",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Rs => "RS",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Sc => "SC",
            Self::Sp => "SP",
            Self::Se => "SE",
            Self::To => "TO",
        }
    }

    /// The CPF region digit assigned to this UF.
    pub fn region_digit(&self) -> char {
        self.fiscal_region().digit
    }

    /// The fiscal region this UF belongs to.
    pub fn fiscal_region(&self) -> &'static FiscalRegion {
        // FISCAL_REGIONS is ordered by region number; the 10th has digit 0
        let slot = match self {
            Self::Df | Self::Go | Self::Ms | Self::Mt | Self::To => 0,
            Self::Ac | Self::Am | Self::Ap | Self::Pa | Self::Ro | Self::Rr => 1,
            Self::Ce | Self::Ma | Self::Pi => 2,
            Self::Al | Self::Pb | Self::Pe | Self::Rn => 3,
            Self::Ba | Self::Se => 4,
            Self::Mg => 5,
            Self::Es | Self::Rj => 6,
            Self::Sp => 7,
            Self::Pr | Self::Sc => 8,
            Self::Rs => 9,
        };
        &FISCAL_REGIONS[slot]
    }
}

impl std::fmt::Display for Uf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Uf {
    type Err = UnknownUf;

    /// Parse a UF code. Surrounding whitespace and case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|uf| uf.as_str() == code)
            .ok_or_else(|| UnknownUf(s.to_string()))
    }
}

/// One of the ten CPF fiscal regions.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct FiscalRegion {
    /// Digit at CPF index 8 that selects this region.
    pub digit: char,
    /// Display name.
    pub name: &'static str,
    /// UFs served by the region.
    pub ufs: &'static [Uf],
}

impl FiscalRegion {
    /// Look up the region for a CPF region digit.
    ///
    /// Returns `None` for anything other than `'0'..='9'`.
    pub fn for_digit(digit: char) -> Option<&'static FiscalRegion> {
        digit.to_digit(10).map(|d| &FISCAL_REGIONS[(d as usize + 9) % 10])
    }

    /// Region for a byte already known to be an ASCII digit.
    pub(crate) fn for_ascii_digit(digit: u8) -> &'static FiscalRegion {
        debug_assert!(digit.is_ascii_digit());
        &FISCAL_REGIONS[(usize::from(digit.wrapping_sub(b'0')) + 9) % 10]
    }
}

/// The fiscal region table, ordered by region number.
pub static FISCAL_REGIONS: [FiscalRegion; 10] = [
    FiscalRegion {
        digit: '1',
        name: "1ª Região Fiscal",
        ufs: &[Uf::Df, Uf::Go, Uf::Ms, Uf::Mt, Uf::To],
    },
    FiscalRegion {
        digit: '2',
        name: "2ª Região Fiscal",
        ufs: &[Uf::Ac, Uf::Am, Uf::Ap, Uf::Pa, Uf::Ro, Uf::Rr],
    },
    FiscalRegion {
        digit: '3',
        name: "3ª Região Fiscal",
        ufs: &[Uf::Ce, Uf::Ma, Uf::Pi],
    },
    FiscalRegion {
        digit: '4',
        name: "4ª Região Fiscal",
        ufs: &[Uf::Al, Uf::Pb, Uf::Pe, Uf::Rn],
    },
    FiscalRegion {
        digit: '5',
        name: "5ª Região Fiscal",
        ufs: &[Uf::Ba, Uf::Se],
    },
    FiscalRegion {
        digit: '6',
        name: "6ª Região Fiscal",
        ufs: &[Uf::Mg],
    },
    FiscalRegion {
        digit: '7',
        name: "7ª Região Fiscal",
        ufs: &[Uf::Es, Uf::Rj],
    },
    FiscalRegion {
        digit: '8',
        name: "8ª Região Fiscal",
        ufs: &[Uf::Sp],
    },
    FiscalRegion {
        digit: '9',
        name: "9ª Região Fiscal",
        ufs: &[Uf::Pr, Uf::Sc],
    },
    FiscalRegion {
        digit: '0',
        name: "10ª Região Fiscal",
        ufs: &[Uf::Rs],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_ufs_count_and_unique() {
        assert_eq!(Uf::all().len(), UF_COUNT);
        let codes: HashSet<_> = Uf::all().iter().map(Uf::as_str).collect();
        assert_eq!(codes.len(), UF_COUNT);
    }

    #[test]
    fn regions_partition_all_ufs() {
        let mut seen = HashSet::new();
        for region in &FISCAL_REGIONS {
            for uf in region.ufs {
                assert!(seen.insert(*uf), "{uf} listed in more than one region");
            }
        }
        assert_eq!(seen.len(), UF_COUNT);
    }

    #[test]
    fn region_digits_cover_zero_to_nine() {
        let digits: HashSet<char> = FISCAL_REGIONS.iter().map(|r| r.digit).collect();
        let expected: HashSet<char> = ('0'..='9').collect();
        assert_eq!(digits, expected);
    }

    #[test]
    fn region_digit_agrees_with_table() {
        for uf in Uf::all() {
            let region = uf.fiscal_region();
            assert_eq!(region.digit, uf.region_digit());
            assert!(region.ufs.contains(uf));
        }
    }

    #[test]
    fn known_region_digits() {
        assert_eq!(Uf::Df.region_digit(), '1');
        assert_eq!(Uf::Sp.region_digit(), '8');
        assert_eq!(Uf::Rs.region_digit(), '0');
    }

    #[test]
    fn digit_lookups_index_the_right_region() {
        for digit in '0'..='9' {
            let region = FiscalRegion::for_digit(digit).unwrap();
            assert_eq!(region.digit, digit);
            assert!(std::ptr::eq(region, FiscalRegion::for_ascii_digit(digit as u8)));
        }
        for region in &FISCAL_REGIONS {
            for uf in region.ufs {
                assert!(std::ptr::eq(uf.fiscal_region(), region));
            }
        }
    }

    #[test]
    fn for_digit_rejects_non_digits() {
        assert!(FiscalRegion::for_digit('a').is_none());
        assert!(FiscalRegion::for_digit(' ').is_none());
        assert_eq!(FiscalRegion::for_digit('0').unwrap().name, "10ª Região Fiscal");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("sp".parse::<Uf>().unwrap(), Uf::Sp);
        assert_eq!(" Df ".parse::<Uf>().unwrap(), Uf::Df);
        assert!("XX".parse::<Uf>().is_err());
        assert!("".parse::<Uf>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        for uf in Uf::all() {
            assert_eq!(uf.to_string(), uf.as_str());
            let parsed: Uf = uf.as_str().parse().unwrap();
            assert_eq!(parsed, *uf);
        }
    }

    #[test]
    fn serde_uses_uppercase_code() {
        assert_eq!(serde_json::to_string(&Uf::Sp).unwrap(), "\"SP\"");
        let parsed: Uf = serde_json::from_str("\"RJ\"").unwrap();
        assert_eq!(parsed, Uf::Rj);
    }
}
