//! # caixa-core — Registry Field Normalization
//!
//! Pure functions that turn what a user types into the customer and
//! supplier forms into display strings, and decide whether a finished
//! value is plausible. Every other crate in the workspace depends on
//! `caixa-core`; it depends on nothing internal.
//!
//! ## The normalizer
//!
//! | Field      | Format                                  | Validate                 |
//! |------------|-----------------------------------------|--------------------------|
//! | CPF/CNPJ   | [`format_document`]                     | [`validate_document`]: 11 or 14 digits |
//! | Phone      | [`format_phone`]                        | [`validate_phone`]: 10..=11 digits     |
//!
//! Formatting strips non-digits, picks a mask by digit count and fills it
//! progressively, so it can run on every keystroke. Validation counts
//! digits only; CPF/CNPJ check digits are never verified.
//!
//! ## Beyond the normalizer
//!
//! - [`TaxId`] and [`PhoneNumber`]: validated newtypes storing bare digits.
//! - [`display`]: BRL currency, `DD/MM/YYYY` dates, percentages.
//! - [`record`]: customer/supplier wire records and the forms' submit checks.
//! - [`account`]: payable/receivable entries and the finance forms' checks.
//!
//! ## Crate Policy
//!
//! - No I/O and no shared state; every function is safe to call from any thread.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod account;
pub mod digits;
pub mod display;
pub mod document;
pub mod error;
pub mod identity;
pub mod mask;
pub mod phone;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use account::{PayableRecord, PayableStatus, ReceivableRecord, ReceivableStatus};
pub use digits::digits_only;
pub use display::{format_currency, format_date, format_percentage, parse_amount};
pub use document::{format_document, validate_document, DocumentKind};
pub use error::{CaixaError, ValidationError};
pub use identity::{PhoneNumber, TaxId};
pub use mask::Mask;
pub use phone::{format_phone, validate_phone, PhoneKind};
pub use record::{CustomerRecord, FieldErrors, Status, SupplierRecord};
