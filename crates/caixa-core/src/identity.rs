//! # Registry Identifier Newtypes
//!
//! Validated wrappers for the two identifier fields every customer and
//! supplier record carries. The free functions in [`crate::document`] and
//! [`crate::phone`] work on raw strings while the user types; these types
//! hold a value once it has passed the same length rule.
//!
//! ## Validation
//!
//! Construction accepts raw or masked input, strips it to digits, and
//! applies exactly the length rule of the matching `validate_*` function.
//! The canonical stored form is the bare digit string. `Display` renders
//! the masked form.

use serde::{Deserialize, Serialize};

use crate::digits::digits_only;
use crate::document::{format_document, DocumentKind};
use crate::error::ValidationError;
use crate::phone::{format_phone, PhoneKind};

/// Deserialize as a plain `String`, then route through the type's `new()`
/// constructor so invalid values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A CPF or CNPJ with a complete digit count.
///
/// Accepts `"12345678901"`, `"123.456.789-01"`, `"12345678000195"` and
/// `"12.345.678/0001-95"` alike. Check digits are not verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaxId(String);

impl_validating_deserialize!(TaxId);

impl TaxId {
    /// Create a tax identifier, keeping only its digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTaxId`] unless the input holds
    /// exactly 11 or 14 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = digits_only(&raw);
        if DocumentKind::detect(&digits).is_none() {
            return Err(ValidationError::InvalidTaxId {
                digits: digits.len(),
                value: raw,
            });
        }
        Ok(Self(digits))
    }

    /// The bare digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CPF for 11 digits, CNPJ for 14.
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::classify(&self.0)
    }

    /// Masked form, e.g. `123.456.789-01`.
    pub fn formatted(&self) -> String {
        format_document(&self.0)
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for TaxId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A Brazilian phone number with area code: 10 digits (landline) or
/// 11 digits (mobile).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneNumber(String);

impl_validating_deserialize!(PhoneNumber);

impl PhoneNumber {
    /// Create a phone number, keeping only its digits.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPhone`] unless the input holds
    /// 10 or 11 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = digits_only(&raw);
        if PhoneKind::detect(&digits).is_none() {
            return Err(ValidationError::InvalidPhone {
                digits: digits.len(),
                value: raw,
            });
        }
        Ok(Self(digits))
    }

    /// The bare digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Landline for 10 digits, mobile for 11.
    pub fn kind(&self) -> PhoneKind {
        PhoneKind::classify(&self.0)
    }

    /// The two-digit area code (DDD).
    pub fn area_code(&self) -> &str {
        &self.0[..2]
    }

    /// Masked form, e.g. `(11) 99999-9999`.
    pub fn formatted(&self) -> String {
        format_phone(&self.0)
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
