//! # Display Subcommands
//!
//! `caixa currency`, `caixa date` and `caixa percent`: pt-BR renderings
//! used by the dashboards and tables.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use caixa_core::{format_currency, format_date, format_percentage, parse_amount};

use crate::output::OutputFormat;

/// Arguments for `caixa currency`.
#[derive(Args, Debug)]
pub struct CurrencyArgs {
    /// Amount such as `1.234,56` or `R$ 10`; integer centavos with --cents.
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Read AMOUNT as integer centavos.
    #[arg(long)]
    pub cents: bool,
}

/// Arguments for `caixa date`.
#[derive(Args, Debug)]
pub struct DateArgs {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,
}

/// Arguments for `caixa percent`.
#[derive(Args, Debug)]
pub struct PercentArgs {
    /// Numeric value, printed as given with a `%` suffix.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Execute `caixa currency`.
pub fn run_currency(args: &CurrencyArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let cents = if args.cents {
        args.amount
            .trim()
            .parse::<i64>()
            .with_context(|| format!("--cents expects an integer, got {:?}", args.amount))?
    } else {
        parse_amount(&args.amount)?
    };
    let formatted = format_currency(cents);
    format.emit(out, &formatted, &json!({ "cents": cents, "formatted": formatted }))?;
    Ok(0)
}

/// Execute `caixa date`.
pub fn run_date(args: &DateArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let formatted = format_date(&args.date)?;
    format.emit(out, &formatted, &json!({ "input": args.date, "formatted": formatted }))?;
    Ok(0)
}

/// Execute `caixa percent`.
pub fn run_percent(args: &PercentArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let value: f64 = args
        .value
        .trim()
        .parse()
        .with_context(|| format!("expected a number, got {:?}", args.value))?;
    let formatted = format_percentage(value);
    format.emit(out, &formatted, &json!({ "value": value, "formatted": formatted }))?;
    Ok(0)
}
