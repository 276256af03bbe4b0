//! # Display Formatters
//!
//! pt-BR renderings shared by the dashboards, tables and forms: Brazilian
//! Real amounts, calendar dates and percentages.
//!
//! Money is carried as integer centavos. Floating-point amounts are not
//! accepted anywhere in this module.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ValidationError;

/// Currency symbol for the Brazilian Real.
pub const BRL_SYMBOL: &str = "R$";

/// Separator between the symbol and the amount (U+00A0, no-break space),
/// as pt-BR locale formatting emits it.
pub const NBSP: char = '\u{a0}';

/// Render centavos as `R$ 1.234,56` with a no-break space after the symbol.
/// Negative amounts are prefixed with `-`.
pub fn format_currency(cents: i64) -> String {
    let abs = cents.unsigned_abs();
    let units = group_thousands(abs / 100);
    let frac = abs % 100;
    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}{BRL_SYMBOL}{NBSP}{units},{frac:02}")
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(".")
}

/// Parse a pt-BR amount into centavos.
///
/// Accepts `1234`, `1234,5`, `1.234,56`, `R$ 1.234,56`, `-R$ 10,00` and
/// `R$ -10`. `.` is a thousands separator: when present, the leading group
/// holds one to three digits and every later group exactly three. `,`
/// introduces at most two decimal places.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAmount`] for empty input, stray
/// characters, misplaced thousands separators, more than two decimals,
/// or values that overflow `i64`.
pub fn parse_amount(input: &str) -> Result<i64, ValidationError> {
    let fail = |reason: &str| ValidationError::InvalidAmount {
        value: input.to_string(),
        reason: reason.to_string(),
    };

    let mut rest = input.trim_matches(|c: char| c.is_whitespace());
    let mut negative = false;
    if let Some(r) = rest.strip_prefix('-') {
        negative = true;
        rest = r;
    }
    if let Some(r) = rest.strip_prefix(BRL_SYMBOL) {
        rest = r.trim_start_matches(|c: char| c.is_whitespace());
    }
    if let Some(r) = rest.strip_prefix('-') {
        if negative {
            return Err(fail("repeated sign"));
        }
        negative = true;
        rest = r;
    }

    let (int_part, frac_part) = match rest.split_once(',') {
        Some((i, f)) => (i, f),
        None => (rest, ""),
    };
    if frac_part.contains(',') {
        return Err(fail("more than one decimal comma"));
    }

    let mut groups = int_part.split('.');
    let lead = groups.next().unwrap_or_default();
    let mut int_digits = lead.to_string();
    for group in groups {
        if !(1..=3).contains(&lead.len()) || group.len() != 3 {
            return Err(fail("misplaced thousands separator"));
        }
        int_digits.push_str(group);
    }
    if int_digits.is_empty() || !int_digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(fail("expected digits before the decimal comma"));
    }
    if frac_part.len() > 2 || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(fail("at most two decimal digits"));
    }

    let units: i64 = int_digits.parse().map_err(|_| fail("out of range"))?;
    let frac: i64 = match frac_part.len() {
        0 => 0,
        1 => frac_part.parse::<i64>().map_err(|_| fail("out of range"))? * 10,
        _ => frac_part.parse().map_err(|_| fail("out of range"))?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac))
        .ok_or_else(|| fail("out of range"))?;
    Ok(if negative { -cents } else { cents })
}

/// Render a date as `DD/MM/YYYY`.
///
/// Accepts a plain ISO date (`2024-01-15`) or an RFC 3339 timestamp
/// (`2024-01-15T10:30:00Z`). Timestamps are converted to UTC before the
/// calendar date is taken.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when neither form parses.
pub fn format_date(input: &str) -> Result<String, ValidationError> {
    let s = input.trim();
    let date = match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc).date_naive())
            .map_err(|_| ValidationError::InvalidDate(input.to_string()))?,
    };
    Ok(date.format("%d/%m/%Y").to_string())
}

/// Append a percent sign: `12.5` → `"12.5%"`.
pub fn format_percentage(value: impl std::fmt::Display) -> String {
    format!("{value}%")
}
