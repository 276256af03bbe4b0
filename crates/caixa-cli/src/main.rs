//! # caixa CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use caixa_cli::check::{run_check, CheckArgs};
use caixa_cli::display::{run_currency, run_date, run_percent, CurrencyArgs, DateArgs, PercentArgs};
use caixa_cli::normalize::{run_document, run_phone, FieldArgs};
use caixa_cli::output::OutputFormat;

/// caixa — registry field toolkit.
///
/// Masks and validates CPF/CNPJ and phone input the way the customer and
/// supplier forms do, renders pt-BR amounts and dates, and checks JSON
/// records against the forms' submit rules.
#[derive(Parser, Debug)]
#[command(name = "caixa", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mask or validate a CPF/CNPJ.
    Document(FieldArgs),

    /// Mask or validate a phone number.
    Phone(FieldArgs),

    /// Render an amount as Brazilian Real.
    Currency(CurrencyArgs),

    /// Render a date as DD/MM/YYYY.
    Date(DateArgs),

    /// Render a value as a percentage.
    Percent(PercentArgs),

    /// Check customer, supplier, payable or receivable records against the form rules.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // -v flags win over RUST_LOG; without them RUST_LOG applies, defaulting to warn.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("caixa CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let format = OutputFormat::from_flag(cli.json);
    let mut stdout = std::io::stdout().lock();

    let result = match &cli.command {
        Commands::Document(args) => run_document(args, format, &mut stdout),
        Commands::Phone(args) => run_phone(args, format, &mut stdout),
        Commands::Currency(args) => run_currency(args, format, &mut stdout),
        Commands::Date(args) => run_date(args, format, &mut stdout),
        Commands::Percent(args) => run_percent(args, format, &mut stdout),
        Commands::Check(args) => run_check(args, format, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caixa_cli::check::CheckKind;
    use caixa_cli::normalize::FieldCommand;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_document_format() {
        let cli = Cli::try_parse_from(["caixa", "document", "format", "12345678901"]).unwrap();
        assert!(!cli.json);
        match cli.command {
            Commands::Document(FieldArgs {
                command: FieldCommand::Format { input },
            }) => assert_eq!(input, "12345678901"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_phone_validate_with_json() {
        let cli =
            Cli::try_parse_from(["caixa", "--json", "phone", "validate", "(11) 99999-9999"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Phone(FieldArgs {
                command: FieldCommand::Validate { .. }
            })
        ));
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["caixa", "date", "2024-01-15", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        if let Commands::Date(args) = cli.command {
            assert_eq!(args.date, "2024-01-15");
        } else {
            panic!("expected date command");
        }
    }

    #[test]
    fn cli_parse_currency_negative_amount() {
        let cli = Cli::try_parse_from(["caixa", "currency", "--cents", "--", "-1234"]).unwrap();
        if let Commands::Currency(args) = cli.command {
            assert_eq!(args.amount, "-1234");
            assert!(args.cents);
        } else {
            panic!("expected currency command");
        }
    }

    #[test]
    fn cli_parse_check_customer() {
        let cli =
            Cli::try_parse_from(["caixa", "check", "customer", "clientes.json", "--normalize"])
                .unwrap();
        if let Commands::Check(args) = cli.command {
            assert!(args.normalize);
            match args.kind {
                CheckKind::Customer { file } => assert_eq!(file, PathBuf::from("clientes.json")),
                other => panic!("unexpected kind: {other:?}"),
            }
        } else {
            panic!("expected check command");
        }
    }

    #[test]
    fn cli_parse_check_finance_kinds() {
        let cli = Cli::try_parse_from(["caixa", "--json", "check", "payable", "contas.json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Check(CheckArgs {
                kind: CheckKind::Payable { file },
                normalize: false,
            }) => assert_eq!(file, PathBuf::from("contas.json")),
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["caixa", "check", "receivable", "receber.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Check(CheckArgs {
                kind: CheckKind::Receivable { .. },
                ..
            })
        ));
    }

    #[test]
    fn cli_rejects_missing_input() {
        assert!(Cli::try_parse_from(["caixa", "document", "format"]).is_err());
        assert!(Cli::try_parse_from(["caixa", "check", "vendor", "x.json"]).is_err());
    }
}
