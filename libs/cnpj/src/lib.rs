//! # brdoc-cnpj
//!
//! CNPJ validation, check-digit computation, and display formatting for
//! the 2026 alphanumeric format.
//!
//! ## Design Principles
//!
//! - Everything is a pure function of its input; there is no state
//! - Validation is strict: lowercase and stray characters are errors,
//!   never silently corrected
//! - One internal guard pipeline backs all entry points; the boolean
//!   predicate, the detailed report, and the `Result` variants are thin
//!   wrappers over it
//! - Error message text (Portuguese) is a fixed contract; stable codes
//!   are available via [`CnpjError::code`]
//!
//! ## Identifier Format
//!
//! ```text
//! 12ABC34501DE35          canonical (12-char base + 2 check digits)
//! 12.ABC.345/01DE-35      display form
//! ```
//!
//! The base accepts `[A-Z0-9]`; the two check digits are always numeric.
//! Check digits come from a weighted mod-11 sum where each character
//! contributes its ASCII offset from `'0'`, so letters feed values above
//! 9 into the sums.
//!
//! ## Example
//!
//! ```
//! use brdoc_cnpj::{is_valid, Cnpj};
//!
//! assert!(is_valid("12.ABC.345/01DE-35"));
//!
//! let cnpj = Cnpj::from_base("000000000001")?;
//! assert_eq!(cnpj.as_str(), "00000000000191");
//! assert_eq!(cnpj.formatted(), "00.000.000/0001-91");
//! # Ok::<(), brdoc_cnpj::CnpjError>(())
//! ```

mod error;
mod types;
mod validate;

pub use error::CnpjError;
pub use types::{CheckDigits, Cnpj, ValidationReport};
pub use validate::{
    calcula_dv, check_digits, format, is_valid, normalize, validate, BASE_LENGTH, TOTAL_LENGTH,
};
