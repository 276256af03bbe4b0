//! # Check Subcommand
//!
//! Runs a form's submit checks (customer, supplier, payable or receivable)
//! over JSON records read from a file. The file holds one record object or
//! an array of them.
//!
//! ## Usage
//!
//! ```bash
//! caixa check customer customers.json
//! caixa --json check supplier suppliers.json
//! caixa check payable contas.json
//! caixa check customer draft.json --normalize   # print re-masked records
//! ```
//!
//! Exits 0 when every record passes, 1 otherwise.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;

use caixa_core::record::parse_records;
use caixa_core::{CustomerRecord, FieldErrors, PayableRecord, ReceivableRecord, SupplierRecord};

use crate::output::OutputFormat;

/// Arguments for `caixa check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(subcommand)]
    pub kind: CheckKind,

    /// Print the records with document and phone fields re-masked.
    /// Payable and receivable entries carry no masked fields and are
    /// printed as parsed.
    #[arg(long, global = true)]
    pub normalize: bool,
}

/// Which record shape the file holds.
#[derive(Subcommand, Debug)]
pub enum CheckKind {
    /// Customer records (`name`, `cpfCnpj`, `email`, `phone`, ...).
    Customer {
        /// Path to a JSON file.
        file: PathBuf,
    },
    /// Supplier records (`nome`, `cnpj`, `telefone`, `endereco`, ...).
    Supplier {
        /// Path to a JSON file.
        file: PathBuf,
    },
    /// Bills to pay (`descricao`, `valor` in centavos, `fornecedor`, ...).
    Payable {
        /// Path to a JSON file.
        file: PathBuf,
    },
    /// Amounts to collect (`descricao`, `valor` in centavos, `cliente`, ...).
    Receivable {
        /// Path to a JSON file.
        file: PathBuf,
    },
}

/// Outcome for one record.
#[derive(Debug, Serialize)]
pub struct RecordReport {
    pub index: usize,
    pub name: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
}

/// Common surface of the checked record types.
trait FormRecord: DeserializeOwned + Serialize {
    fn display_name(&self) -> &str;
    fn check(&self) -> Result<(), FieldErrors>;
    fn remasked(&self) -> Self;
}

impl FormRecord for CustomerRecord {
    fn display_name(&self) -> &str {
        &self.name
    }
    fn check(&self) -> Result<(), FieldErrors> {
        self.validate()
    }
    fn remasked(&self) -> Self {
        self.normalized()
    }
}

impl FormRecord for SupplierRecord {
    fn display_name(&self) -> &str {
        &self.nome
    }
    fn check(&self) -> Result<(), FieldErrors> {
        self.validate()
    }
    fn remasked(&self) -> Self {
        self.normalized()
    }
}

impl FormRecord for PayableRecord {
    fn display_name(&self) -> &str {
        &self.descricao
    }
    fn check(&self) -> Result<(), FieldErrors> {
        self.validate()
    }
    fn remasked(&self) -> Self {
        self.clone()
    }
}

impl FormRecord for ReceivableRecord {
    fn display_name(&self) -> &str {
        &self.descricao
    }
    fn check(&self) -> Result<(), FieldErrors> {
        self.validate()
    }
    fn remasked(&self) -> Self {
        self.clone()
    }
}

fn load<T: FormRecord>(path: &Path) -> Result<Vec<T>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_records(&raw).with_context(|| format!("failed to parse records in {}", path.display()))
}

fn report<T: FormRecord>(records: &[T]) -> Vec<RecordReport> {
    records
        .iter()
        .enumerate()
        .map(|(index, r)| {
            let errors = r.check().err().unwrap_or_default();
            RecordReport {
                index,
                name: r.display_name().to_string(),
                valid: errors.is_empty(),
                errors,
            }
        })
        .collect()
}

fn render_text(reports: &[RecordReport]) -> String {
    let mut lines = Vec::new();
    for r in reports {
        if r.valid {
            lines.push(format!("[{}] {}: ok", r.index, r.name));
        } else {
            lines.push(format!("[{}] {}: {} problem(s)", r.index, r.name, r.errors.len()));
            for (field, message) in r.errors.iter() {
                lines.push(format!("    {field}: {message}"));
            }
        }
    }
    lines.join("\n")
}

fn run_kind<T: FormRecord>(
    path: &Path,
    normalize: bool,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<u8> {
    let records: Vec<T> = load(path)?;
    tracing::info!(file = %path.display(), count = records.len(), "checking records");

    let reports = report(&records);
    let failed = reports.iter().filter(|r| !r.valid).count();
    if failed > 0 {
        tracing::warn!(failed, total = reports.len(), "records failed validation");
    }

    if normalize {
        let remasked: Vec<T> = records.iter().map(FormRecord::remasked).collect();
        let rendered =
            serde_json::to_string_pretty(&remasked).context("failed to serialize records")?;
        format.emit(out, &rendered, &remasked)?;
    } else {
        format.emit(out, &render_text(&reports), &reports)?;
    }

    Ok(if failed == 0 { 0 } else { 1 })
}

/// Execute `caixa check ...`.
pub fn run_check(args: &CheckArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    match &args.kind {
        CheckKind::Customer { file } => run_kind::<CustomerRecord>(file, args.normalize, format, out),
        CheckKind::Supplier { file } => run_kind::<SupplierRecord>(file, args.normalize, format, out),
        CheckKind::Payable { file } => run_kind::<PayableRecord>(file, args.normalize, format, out),
        CheckKind::Receivable { file } => {
            run_kind::<ReceivableRecord>(file, args.normalize, format, out)
        }
    }
}
