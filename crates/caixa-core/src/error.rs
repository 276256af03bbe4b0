//! # Error Types
//!
//! The normalizer functions in [`crate::document`] and [`crate::phone`]
//! are total and never produce errors. Errors only arise when a value is
//! promoted into a validated newtype ([`crate::TaxId`], [`crate::PhoneNumber`])
//! or when a display formatter is handed something it cannot parse, and
//! when a batch of records fails to parse (see [`crate::record::parse_records`]).

use thiserror::Error;

/// Top-level error type for the caixa crates.
#[derive(Error, Debug)]
pub enum CaixaError {
    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when constructing validated domain primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Tax identifier does not carry 11 (CPF) or 14 (CNPJ) digits.
    #[error("invalid CPF/CNPJ: \"{value}\" has {digits} digits (expected 11 or 14)")]
    InvalidTaxId {
        /// The rejected input, as given.
        value: String,
        /// Number of digits found in the input.
        digits: usize,
    },

    /// Phone number does not carry 10 (landline) or 11 (mobile) digits.
    #[error("invalid phone number: \"{value}\" has {digits} digits (expected 10 or 11)")]
    InvalidPhone {
        /// The rejected input, as given.
        value: String,
        /// Number of digits found in the input.
        digits: usize,
    },

    /// Monetary amount could not be parsed into centavos.
    #[error("invalid amount: \"{value}\" ({reason})")]
    InvalidAmount {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Date string is neither `YYYY-MM-DD` nor RFC 3339.
    #[error("invalid date: \"{0}\" (expected YYYY-MM-DD or RFC 3339)")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_id_error_mentions_digit_count() {
        let err = ValidationError::InvalidTaxId {
            value: "123".into(),
            digits: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("\"123\""));
        assert!(msg.contains("3 digits"));
    }

    #[test]
    fn validation_error_lifts_into_caixa_error() {
        let err: CaixaError = ValidationError::InvalidDate("ontem".into()).into();
        assert!(matches!(err, CaixaError::Validation(_)));
        assert!(err.to_string().starts_with("validation error:"));
    }
}
