//! # CPF/CNPJ Normalization
//!
//! Masks free-text tax identifiers as the user types and reports whether a
//! finished value has a plausible length.
//!
//! The digit count alone selects the shape: up to 11 digits is a CPF
//! (`###.###.###-##`), anything longer is a CNPJ (`##.###.###/####-##`).
//! Validation accepts the two complete lengths, 11 and 14, and nothing in
//! between.
//!
//! ## Limitations
//!
//! Neither CPF nor CNPJ check digits (mod-11) are verified. Any 11- or
//! 14-digit string is accepted, including `00000000000`.

use serde::{Deserialize, Serialize};

use crate::digits::{digit_count, digits_only};
use crate::mask::{CNPJ_MASK, CPF_MASK};

/// Digits in a complete CPF.
pub const CPF_LEN: usize = 11;

/// Digits in a complete CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Which tax-identifier shape a digit string takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    /// Individual taxpayer (Cadastro de Pessoas Físicas).
    Cpf,
    /// Company taxpayer (Cadastro Nacional da Pessoa Jurídica).
    Cnpj,
}

impl DocumentKind {
    /// Select the shape used for masking. Partial input up to 11 digits is
    /// treated as a CPF; 12 digits or more flips to CNPJ.
    pub fn classify(input: &str) -> Self {
        if digit_count(input) <= CPF_LEN {
            Self::Cpf
        } else {
            Self::Cnpj
        }
    }

    /// Identify a complete document. Returns `None` unless the input holds
    /// exactly 11 or 14 digits.
    pub fn detect(input: &str) -> Option<Self> {
        match digit_count(input) {
            CPF_LEN => Some(Self::Cpf),
            CNPJ_LEN => Some(Self::Cnpj),
            _ => None,
        }
    }

    /// Number of digits in a complete document of this kind.
    pub fn digit_len(self) -> usize {
        match self {
            Self::Cpf => CPF_LEN,
            Self::Cnpj => CNPJ_LEN,
        }
    }

    /// Short label used in messages and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mask a CPF or CNPJ for display.
///
/// Never fails: empty or digit-free input yields `""`, partial input yields
/// a partial mask, and digits past the 14th are dropped. Formatting an
/// already formatted value gives the same result.
pub fn format_document(input: &str) -> String {
    let digits = digits_only(input);
    match DocumentKind::classify(&digits) {
        DocumentKind::Cpf => CPF_MASK.apply(&digits),
        DocumentKind::Cnpj => CNPJ_MASK.apply(&digits),
    }
}

/// `true` iff the input carries exactly 11 or exactly 14 digits.
///
/// Lengths 12 and 13 are rejected even though they format as CNPJ-shaped.
/// Phone validation accepts a range instead; see [`crate::phone::validate_phone`].
pub fn validate_document(input: &str) -> bool {
    DocumentKind::detect(input).is_some()
}
