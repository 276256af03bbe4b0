//! # caixa-cli — Command-Line Front End
//!
//! Exposes the `caixa-core` normalizer and formatters as subcommands so the
//! masking and validation rules can be exercised from scripts and CI.
//!
//! ## Subcommands
//!
//! - `document` — mask or validate a CPF/CNPJ
//! - `phone` — mask or validate a phone number
//! - `currency`, `date`, `percent` — pt-BR display formatting
//! - `check` — run the customer, supplier, payable or receivable form checks over JSON records
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers take parsed args and a
//!   writer and return an exit code.
//! - Handlers delegate to `caixa-core`; no normalization logic here.
//! - Results go to the writer (stdout); logs go to stderr.

pub mod check;
pub mod display;
pub mod normalize;
pub mod output;
