//! Typed wrappers over validated CNPJ data.
//!
//! `Cnpj` can only be constructed through full validation, so holding one
//! is proof the identifier is well-formed and its check digits match.

use serde::{Deserialize, Serialize};

use crate::error::CnpjError;
use crate::validate::{self, BASE_LENGTH};

/// A validated CNPJ in normalized form (14 characters, no separators,
/// uppercase).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Parses and fully validates a candidate CNPJ.
    ///
    /// Accepts formatted or unformatted input; lowercase and stray
    /// characters are rejected.
    pub fn parse(s: &str) -> Result<Self, CnpjError> {
        validate::validate_strict(s).map(Self)
    }

    /// Builds a complete CNPJ from a 12-character base by computing its
    /// check digits.
    pub fn from_base(base: &str) -> Result<Self, CnpjError> {
        let dv = validate::check_digits(base)?;
        let mut s = validate::normalize(base);
        s.push_str(&dv.to_string());
        Ok(Self(s))
    }

    /// The normalized 14-character form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 12-character alphanumeric base.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.0[..BASE_LENGTH]
    }

    /// The two check digits.
    #[must_use]
    pub fn check_digits(&self) -> &str {
        &self.0[BASE_LENGTH..]
    }

    /// The display form, `XX.XXX.XXX/XXXX-XX`.
    #[must_use]
    pub fn formatted(&self) -> String {
        validate::mask(&self.0)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Cnpj {
    type Err = CnpjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Cnpj {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A pair of computed check digits, each in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckDigits {
    first: u8,
    second: u8,
}

impl CheckDigits {
    pub(crate) const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// The first check digit.
    #[must_use]
    pub const fn first(&self) -> u8 {
        self.first
    }

    /// The second check digit.
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }
}

impl std::fmt::Display for CheckDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Outcome of a detailed validation.
///
/// `errors` is absent when the candidate is valid, never an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Whether the candidate passed every check.
    pub is_valid: bool,

    /// Human-readable error messages, in guard order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ValidationReport {
    pub(crate) fn valid() -> Self {
        Self {
            is_valid: true,
            errors: None,
        }
    }

    pub(crate) fn invalid(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors: Some(errors),
        }
    }
}
