//! # Known Vector Tests
//!
//! Fixed inputs with published outputs, exercised through the public API
//! only. If any of these fail, documents produced elsewhere will be
//! rejected (or forged ones accepted) by this crate.

use brdoc_core::{cnpj, cpf, DocumentError, Uf, ValidateOptions, WeightCycle};

// ---------------------------------------------------------------------------
// CNPJ
// ---------------------------------------------------------------------------

#[test]
fn cnpj_validates_and_keeps_raw_value() {
    let cnpj = cnpj::validate("48217216000130", &ValidateOptions::default()).unwrap();
    assert_eq!(cnpj.as_str(), "48217216000130");
}

#[test]
fn cnpj_check_digits() {
    assert_eq!(cnpj::calculate_check_digits("482172160001"), Ok([3, 0]));
}

#[test]
fn cnpj_formatting() {
    let cnpj = cnpj::validate("48217216000130", &ValidateOptions::default()).unwrap();
    assert_eq!(cnpj::extract_info(&cnpj).formatted, "48.217.216/0001-30");
}

#[test]
fn cnpj_thirteen_chars_is_length_error() {
    let err = cnpj::validate("1234567890123", &ValidateOptions::default()).unwrap_err();
    assert!(matches!(err, DocumentError::InvalidLength { .. }));
    assert_eq!(err.code(), "invalid-length");
}

#[test]
fn cnpj_alphanumeric_example() {
    assert_eq!(cnpj::calculate_check_digits("12ABC34501DE"), Ok([3, 5]));
    let cnpj: brdoc_core::Cnpj = "12ABC34501DE35".parse().unwrap();
    assert_eq!(cnpj::extract_info(&cnpj).formatted, "12.ABC.345/01DE-35");
}

// ---------------------------------------------------------------------------
// CPF
// ---------------------------------------------------------------------------

#[test]
fn cpf_check_digits() {
    assert_eq!(cpf::calculate_check_digits("433780732"), Ok([2, 5]));
}

#[test]
fn cpf_info() {
    let cpf = cpf::validate("43378073225").unwrap();
    let info = cpf::extract_info(&cpf);
    assert_eq!(info.formatted, "433.780.732-25");
    assert!(info.region.name.starts_with("2ª"));
}

#[test]
fn cpf_generation_honours_uf() {
    let expectations = [(Uf::Df, '1'), (Uf::Sp, '8'), (Uf::Rs, '0')];
    for (uf, digit) in expectations {
        let cpf = cpf::generate(&cpf::CpfGenerateOptions { uf: Some(uf) });
        assert_eq!(cpf.as_str().as_bytes()[8], digit as u8);
    }
}

// ---------------------------------------------------------------------------
// Cyclic weights
// ---------------------------------------------------------------------------

#[test]
fn cycle_wrap_laws() {
    let table = [1, 2, 3, 4, 5];
    let mut a = WeightCycle::new(&table);
    let mut b = WeightCycle::new(&table);
    assert_eq!(a.advance_by(7).next_value(), b.advance_by(2).next_value());

    let mut c = WeightCycle::new(&table);
    assert_eq!(c.advance_by(-13).advance_by(13).next_value(), 1);

    let mut d = WeightCycle::new(&table);
    assert_eq!(d.advance_by(-15).next_value(), 1);
}
