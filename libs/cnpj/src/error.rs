//! Error types for CNPJ parsing and validation.
//!
//! Display text is the fixed Portuguese message contract inherited from
//! existing consumers, who pattern-match on it. Callers that prefer a
//! machine-readable discriminant should use [`CnpjError::code`].

use thiserror::Error;

/// Errors that can occur when validating a CNPJ or computing its check
/// digits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CnpjError {
    /// The input is empty or whitespace-only.
    #[error("CNPJ não pode estar vazio")]
    Empty,

    /// The raw input contains a character outside `[A-Za-z0-9./-]`, or
    /// contains a lowercase letter. Lowercase is rejected, not corrected.
    #[error("CNPJ contém caracteres inválidos")]
    InvalidCharacters,

    /// After stripping separators, the input is not 12 alphanumeric
    /// characters followed by 2 digits.
    #[error("CNPJ deve ter 12 dígitos (sem DV) ou 14 dígitos (com DV)")]
    InvalidLength,

    /// The base is not exactly 12 characters from `[A-Z0-9]`, so check
    /// digits cannot be computed for it.
    #[error("Não é possível calcular o DV pois o CNPJ fornecido é inválido")]
    InvalidBase,

    /// The identifier consists entirely of zeros.
    #[error("CNPJ não pode ser composto apenas por zeros")]
    Zeroed,

    /// The provided check digits do not match the computed ones.
    #[error("Dígitos verificadores inválidos")]
    CheckDigitMismatch,

    /// The input handed to [`format`](crate::format) is not exactly 14
    /// characters after stripping separators.
    #[error("CNPJ deve ter exatamente 14 caracteres para formatação")]
    FormatLength,
}

impl CnpjError {
    /// Returns the stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CnpjError::Empty => "EMPTY_INPUT",
            CnpjError::InvalidCharacters => "INVALID_CHARS",
            CnpjError::InvalidLength => "INVALID_LENGTH",
            CnpjError::InvalidBase => "INVALID_FORMAT",
            CnpjError::Zeroed => "ZERO_CNPJ",
            CnpjError::CheckDigitMismatch => "INVALID_CHECK_DIGITS",
            CnpjError::FormatLength => "INVALID_LENGTH",
        }
    }

    /// Returns true if this error indicates the input was empty.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, CnpjError::Empty)
    }

    /// Returns true if this error indicates a structural problem with the
    /// input (characters or length), as opposed to a check-digit mismatch.
    pub fn is_structural(&self) -> bool {
        !matches!(self, CnpjError::CheckDigitMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_the_fixed_contract() {
        assert_eq!(CnpjError::Empty.to_string(), "CNPJ não pode estar vazio");
        assert_eq!(
            CnpjError::InvalidBase.to_string(),
            "Não é possível calcular o DV pois o CNPJ fornecido é inválido"
        );
        assert_eq!(
            CnpjError::Zeroed.to_string(),
            "CNPJ não pode ser composto apenas por zeros"
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(CnpjError::Empty.code(), "EMPTY_INPUT");
        assert_eq!(CnpjError::InvalidCharacters.code(), "INVALID_CHARS");
        assert_eq!(CnpjError::InvalidBase.code(), "INVALID_FORMAT");
        assert_eq!(CnpjError::Zeroed.code(), "ZERO_CNPJ");
        assert_eq!(CnpjError::FormatLength.code(), "INVALID_LENGTH");
    }

    #[test]
    fn test_structural_predicate() {
        assert!(CnpjError::InvalidLength.is_structural());
        assert!(!CnpjError::CheckDigitMismatch.is_structural());
    }
}
