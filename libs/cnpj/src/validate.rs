//! CNPJ normalization, validation, and check-digit computation.
//!
//! The validation pipeline is a fixed sequence of guards over the raw
//! input, followed by the weighted mod-11 computation:
//!
//! 1. empty / whitespace-only input
//! 2. character set of the *raw* string (lowercase is an error here,
//!    even though normalization would uppercase it)
//! 3. structure of the normalized string
//! 4. the all-zero identifier
//! 5. check-digit comparison
//!
//! The first failing guard wins; nothing past it runs.

use crate::error::CnpjError;
use crate::types::{CheckDigits, ValidationReport};

/// Length of the alphanumeric base, without check digits.
pub const BASE_LENGTH: usize = 12;

/// Length of a complete CNPJ, check digits included.
pub const TOTAL_LENGTH: usize = 14;

/// Weights shared by both check-digit sums, indexed with an offset of one
/// between them.
const WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

const ZERO_BASE: &str = "000000000000";
const ZERO_CNPJ: &str = "00000000000000";

/// Returns true for the display separators `.`, `/`, and `-`.
fn is_separator(c: char) -> bool {
    matches!(c, '.' | '/' | '-')
}

fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|c| !is_separator(*c)).collect()
}

/// Normalizes a raw CNPJ string: strips display separators and
/// ASCII-uppercases the remainder. Total; never fails.
pub fn normalize(raw: &str) -> String {
    strip_separators(raw).to_ascii_uppercase()
}

/// Rejects raw input containing anything outside `[A-Za-z0-9./-]`, or any
/// lowercase letter. Runs before separators are stripped.
fn check_raw_charset(raw: &str) -> Result<(), CnpjError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || is_separator(c);
    if raw.chars().any(|c| !allowed(c)) || raw.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(CnpjError::InvalidCharacters);
    }
    Ok(())
}

/// True if `s` is exactly 12 characters from `[A-Z0-9]`.
fn is_base(s: &str) -> bool {
    s.len() == BASE_LENGTH
        && s.bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}

/// True if `s` is a complete normalized CNPJ: 12 alphanumerics followed by
/// 2 digits. Check digits are always numeric, even for alphanumeric bases.
fn is_complete(s: &str) -> bool {
    s.len() == TOTAL_LENGTH
        && is_base(&s[..BASE_LENGTH])
        && s[BASE_LENGTH..].bytes().all(|b| b.is_ascii_digit())
}

/// Folds a weighted sum into a single check digit.
fn fold_digit(sum: u32) -> u8 {
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// The weighted mod-11 computation over a normalized 12-character base.
///
/// Each character contributes its ASCII offset from `'0'`: digits map to
/// 0–9 and uppercase letters to 17–42. Letters feeding values above 9
/// into the sums is intentional.
fn weighted_digits(base: &str) -> CheckDigits {
    let mut first_sum = 0u32;
    let mut second_sum = 0u32;

    for (i, b) in base.bytes().enumerate() {
        let value = u32::from(b - b'0');
        first_sum += value * WEIGHTS[i + 1];
        second_sum += value * WEIGHTS[i];
    }

    let first = fold_digit(first_sum);
    second_sum += u32::from(first) * WEIGHTS[BASE_LENGTH];
    let second = fold_digit(second_sum);

    CheckDigits::new(first, second)
}

/// Computes the two check digits for a 12-character CNPJ base.
///
/// The base may carry display separators and must already be uppercase;
/// lowercase input is rejected, not corrected.
pub fn check_digits(base: &str) -> Result<CheckDigits, CnpjError> {
    if base.trim().is_empty() {
        return Err(CnpjError::Empty);
    }
    check_raw_charset(base)?;

    let cleaned = normalize(base);
    if !is_base(&cleaned) {
        return Err(CnpjError::InvalidBase);
    }
    if cleaned == ZERO_BASE {
        return Err(CnpjError::Zeroed);
    }

    Ok(weighted_digits(&cleaned))
}

/// Legacy check-digit entry point.
///
/// Behaves like [`check_digits`] but collapses every failure into the
/// single fixed message existing callers expect
/// ("Não é possível calcular o DV pois o CNPJ fornecido é inválido").
pub fn calcula_dv(base: &str) -> Result<String, CnpjError> {
    check_digits(base)
        .map(|dv| dv.to_string())
        .map_err(|_| CnpjError::InvalidBase)
}

/// Runs the full guard pipeline over a candidate and returns the
/// normalized form on success.
pub(crate) fn validate_strict(candidate: &str) -> Result<String, CnpjError> {
    if candidate.trim().is_empty() {
        return Err(CnpjError::Empty);
    }
    check_raw_charset(candidate)?;

    let cleaned = normalize(candidate);
    if !is_complete(&cleaned) {
        return Err(CnpjError::InvalidLength);
    }
    if cleaned == ZERO_CNPJ {
        return Err(CnpjError::Zeroed);
    }

    let (base, provided) = cleaned.split_at(BASE_LENGTH);
    let computed = check_digits(base)?;
    if provided != computed.to_string() {
        return Err(CnpjError::CheckDigitMismatch);
    }

    Ok(cleaned)
}

/// Validates a complete CNPJ and reports the outcome with error detail.
///
/// Never fails itself; problems are carried in the report's `errors` list,
/// which is absent (not empty) when the candidate is valid.
pub fn validate(candidate: &str) -> ValidationReport {
    match validate_strict(candidate) {
        Ok(_) => ValidationReport::valid(),
        Err(e) => ValidationReport::invalid(vec![e.to_string()]),
    }
}

/// Forgiving boolean predicate over [`validate`].
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_valid
}

/// Inserts the display separators into a cleaned 14-character string.
/// Caller guarantees the length.
pub(crate) fn mask(cleaned: &str) -> String {
    let mut out = String::with_capacity(TOTAL_LENGTH + 4);
    for (i, c) in cleaned.chars().enumerate() {
        match i {
            2 | 5 => out.push('.'),
            8 => out.push('/'),
            12 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Formats a CNPJ for display as `XX.XXX.XXX/XXXX-XX`.
///
/// Any existing separators are stripped first; the remainder must be
/// exactly 14 characters. No other validation is performed.
pub fn format(candidate: &str) -> Result<String, CnpjError> {
    let cleaned = strip_separators(candidate);
    if cleaned.chars().count() != TOTAL_LENGTH {
        return Err(CnpjError::FormatLength);
    }
    Ok(mask(&cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_check_digits_known_vectors() {
        assert_eq!(check_digits("000000000001").unwrap().to_string(), "91");
        assert_eq!(check_digits("12.ABC.345/01DE").unwrap().to_string(), "35");
    }

    #[test]
    fn test_calcula_dv_known_vectors() {
        assert_eq!(calcula_dv("000000000001").unwrap(), "91");
        assert_eq!(calcula_dv("12.ABC.345/01DE").unwrap(), "35");
    }

    #[test]
    fn test_calcula_dv_collapses_errors_to_fixed_message() {
        let msg = "Não é possível calcular o DV pois o CNPJ fornecido é inválido";
        for bad in [
            "",               // empty
            "'!@#$%&*-_=+^~", // only disallowed characters
            "$0123456789A",   // disallowed character at the start
            "012345?6789A",   // disallowed character in the middle
            "0123456789A#",   // disallowed character at the end
            "12ABc34501DE",   // lowercase letter
            "00000000000",    // too short
            "00000000000191", // too long
        ] {
            let err = calcula_dv(bad).unwrap_err();
            assert_eq!(err.to_string(), msg, "input: {bad:?}");
        }
    }

    #[test]
    fn test_check_digits_detailed_errors() {
        assert_eq!(check_digits("").unwrap_err(), CnpjError::Empty);
        assert_eq!(check_digits("   ").unwrap_err(), CnpjError::Empty);
        assert_eq!(
            check_digits("12ABc34501DE").unwrap_err(),
            CnpjError::InvalidCharacters
        );
        assert_eq!(
            check_digits("012345?6789A").unwrap_err(),
            CnpjError::InvalidCharacters
        );
        assert_eq!(
            check_digits("00000000000").unwrap_err(),
            CnpjError::InvalidBase
        );
        assert_eq!(
            check_digits("000000000000").unwrap_err(),
            CnpjError::Zeroed
        );
    }

    #[test]
    fn test_is_valid_accepts_known_good() {
        for good in [
            "12.ABC.345/01DE-35",
            "90.021.382/0001-22",
            "90.024.778/0001-23",
            "90.025.108/0001-21",
            "90.025.255/0001-00",
            "90.024.420/0001-09",
            "90.024.781/0001-47",
            "04.740.714/0001-97",
            "44.108.058/0001-29",
            "90.024.780/0001-00",
            "90.024.779/0001-78",
            "00000000000191",
            "ABCDEFGHIJKL80",
        ] {
            assert!(is_valid(good), "expected valid: {good:?}");
        }
    }

    #[test]
    fn test_is_valid_rejects_known_bad() {
        for bad in [
            "",                   // empty
            "'!@#$%&*-_=+^~",     // only disallowed characters
            "$0123456789ABC",     // disallowed character at the start
            "0123456?789ABC",     // disallowed character in the middle
            "0123456789ABC#",     // disallowed character at the end
            "12.ABc.345/01DE-35", // lowercase letter
            "0000000000019",      // too short
            "000000000001911",    // too long
            "0000000000019L",     // letter in second check-digit position
            "000000000001P1",     // letter in first check-digit position
            "00000000000192",     // wrong check digits
            "ABCDEFGHIJKL81",     // wrong check digits
            "00000000000000",     // zeroed
            "00.000.000/0000-00", // zeroed, with separators
        ] {
            assert!(!is_valid(bad), "expected invalid: {bad:?}");
        }
    }

    #[test]
    fn test_validate_reports_single_first_failure() {
        let report = validate("");
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            Some(vec!["CNPJ não pode estar vazio".to_string()])
        );

        let report = validate("00000000000192");
        assert_eq!(
            report.errors,
            Some(vec!["Dígitos verificadores inválidos".to_string()])
        );

        let report = validate("90.021.382/0001-22");
        assert!(report.is_valid);
        assert!(report.errors.is_none());
    }

    #[test]
    fn test_zero_base_with_nonzero_digits_reports_zeroed() {
        // Base is all zeros but the full identifier is not; the zero-base
        // guard inside the digit computation fires.
        let report = validate("00000000000012");
        assert_eq!(
            report.errors,
            Some(vec!["CNPJ não pode ser composto apenas por zeros".to_string()])
        );
    }

    #[test]
    fn test_normalize_strips_and_uppercases() {
        assert_eq!(normalize("12.abc.345/01de-35"), "12ABC34501DE35");
        assert_eq!(normalize("90.021.382/0001-22"), "90021382000122");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("12.ABC.345/01DE-35");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_format_masks_clean_input() {
        assert_eq!(format("12ABC34501DE35").unwrap(), "12.ABC.345/01DE-35");
        assert_eq!(format("00000000000191").unwrap(), "00.000.000/0001-91");
    }

    #[test]
    fn test_format_reformats_already_formatted_input() {
        let formatted = format("12.ABC.345/01DE-35").unwrap();
        assert_eq!(formatted, "12.ABC.345/01DE-35");
    }

    #[test]
    fn test_format_rejects_wrong_length() {
        assert_eq!(format("123").unwrap_err(), CnpjError::FormatLength);
        assert_eq!(
            format("12ABC34501DE351").unwrap_err(),
            CnpjError::FormatLength
        );
        assert_eq!(format("").unwrap_err(), CnpjError::FormatLength);
    }

    fn base_char() -> impl Strategy<Value = char> {
        prop::char::ranges(vec!['0'..='9', 'A'..='Z'].into())
    }

    proptest! {
        #[test]
        fn prop_check_digits_round_trip(base in prop::collection::vec(base_char(), 12)) {
            let base: String = base.into_iter().collect();
            prop_assume!(base != "000000000000");

            let dv = check_digits(&base).unwrap();
            let complete = std::format!("{base}{dv}");
            prop_assert!(is_valid(&complete));
        }

        #[test]
        fn prop_digits_are_single_decimal(base in prop::collection::vec(base_char(), 12)) {
            let base: String = base.into_iter().collect();
            prop_assume!(base != "000000000000");

            let dv = check_digits(&base).unwrap();
            prop_assert!(dv.first() <= 9);
            prop_assert!(dv.second() <= 9);
        }

        #[test]
        fn prop_normalize_idempotent(raw in "[0-9A-Z./-]{0,20}") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_format_strip_format_round_trip(base in prop::collection::vec(base_char(), 12)) {
            let base: String = base.into_iter().collect();
            prop_assume!(base != "000000000000");

            let dv = check_digits(&base).unwrap();
            let complete = std::format!("{base}{dv}");
            let formatted = format(&complete).unwrap();
            prop_assert_eq!(format(&formatted).unwrap(), formatted);
        }
    }
}
