//! # Document and Phone Subcommands
//!
//! `caixa document format|validate <INPUT>` and
//! `caixa phone format|validate <INPUT>`.
//!
//! ## Usage
//!
//! ```bash
//! caixa document format 12345678000195     # 12.345.678/0001-95
//! caixa phone validate "(11) 3333-3333"    # valid landline, exit 0
//! caixa --json document validate 123       # {"valid": false, ...}, exit 1
//! ```

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use caixa_core::digits::digit_count;
use caixa_core::{format_document, format_phone, validate_document, validate_phone};
use caixa_core::{DocumentKind, PhoneKind};

use crate::output::OutputFormat;

/// Arguments shared by the `document` and `phone` subcommands.
#[derive(Args, Debug)]
pub struct FieldArgs {
    #[command(subcommand)]
    pub command: FieldCommand,
}

/// What to do with the input.
#[derive(Subcommand, Debug)]
pub enum FieldCommand {
    /// Print the masked form of INPUT.
    Format {
        /// Raw or already masked input.
        input: String,
    },
    /// Check the digit count of INPUT. Exits 1 when invalid.
    Validate {
        /// Raw or already masked input.
        input: String,
    },
}

#[derive(Serialize)]
struct Formatted<'a> {
    input: &'a str,
    formatted: String,
    kind: &'static str,
}

#[derive(Serialize)]
struct Verdict<'a> {
    input: &'a str,
    valid: bool,
    digits: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
}

fn verdict_line(v: &Verdict<'_>, label: &str) -> String {
    match v.kind {
        Some(kind) => format!("valid {kind} ({} digits)", v.digits),
        None => format!("invalid {label} ({} digits)", v.digits),
    }
}

/// Execute `caixa document ...`.
pub fn run_document(args: &FieldArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    match &args.command {
        FieldCommand::Format { input } => {
            let result = Formatted {
                input,
                formatted: format_document(input),
                kind: DocumentKind::classify(input).as_str(),
            };
            tracing::debug!(kind = result.kind, "masked document");
            format.emit(out, &result.formatted, &result)?;
            Ok(0)
        }
        FieldCommand::Validate { input } => {
            let valid = validate_document(input);
            let verdict = Verdict {
                input,
                valid,
                digits: digit_count(input),
                kind: DocumentKind::detect(input).map(DocumentKind::as_str),
            };
            format.emit(out, &verdict_line(&verdict, "CPF/CNPJ"), &verdict)?;
            Ok(if valid { 0 } else { 1 })
        }
    }
}

/// Execute `caixa phone ...`.
pub fn run_phone(args: &FieldArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    match &args.command {
        FieldCommand::Format { input } => {
            let result = Formatted {
                input,
                formatted: format_phone(input),
                kind: PhoneKind::classify(input).as_str(),
            };
            tracing::debug!(kind = result.kind, "masked phone");
            format.emit(out, &result.formatted, &result)?;
            Ok(0)
        }
        FieldCommand::Validate { input } => {
            let valid = validate_phone(input);
            let verdict = Verdict {
                input,
                valid,
                digits: digit_count(input),
                kind: PhoneKind::detect(input).map(PhoneKind::as_str),
            };
            format.emit(out, &verdict_line(&verdict, "phone"), &verdict)?;
            Ok(if valid { 0 } else { 1 })
        }
    }
}
