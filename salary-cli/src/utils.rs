use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use salary_core::ContractType;
use thiserror::Error;

/// Error returned when a string is not a recognisable monetary amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("invalid amount '{0}': expected e.g. 5000.00, 5,000.00 or 5.000,00")]
    Format(String),

    #[error("amount '{0}' must not be negative")]
    Negative(String),

    #[error("invalid amount '{input}': {source}")]
    Decimal {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// `5.000,00`, `5.000` or `5000,5`: dots group thousands, comma marks cents.
static LOCAL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,3}(?:\.\d{3})+(?:,\d{1,2})?|\d+,\d{1,2})$").expect("valid regex")
});

/// `5000`, `5000.00` or `5,000.00`: commas group thousands, dot marks cents.
static PLAIN_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+|\d{1,3}(?:,\d{3})+)(?:\.\d+)?$").expect("valid regex")
});

/// Normalizes an amount typed by a user into `Decimal` syntax.
///
/// An optional `R$` prefix is dropped. A dot followed by exactly three
/// digits is read as a thousands separator, so `5.000` is five thousand.
fn normalize_amount(s: &str) -> Result<String, ParseAmountError> {
    let trimmed = s.trim();
    let unprefixed = trimmed.strip_prefix("R$").unwrap_or(trimmed).trim();

    if unprefixed.starts_with('-') {
        return Err(ParseAmountError::Negative(s.to_string()));
    }

    if LOCAL_FORMAT.is_match(unprefixed) {
        Ok(unprefixed.replace('.', "").replace(',', "."))
    } else if PLAIN_FORMAT.is_match(unprefixed) {
        Ok(unprefixed.replace(',', ""))
    } else {
        Err(ParseAmountError::Format(s.to_string()))
    }
}

/// Parses a non-negative monetary amount in plain or local notation.
///
/// Empty input is an error; the engine never receives a guessed value.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount(s).inspect_err(|e| {
        tracing::debug!(input = %s, "rejected amount: {e}");
    })?;

    normalized
        .parse()
        .map_err(|source| ParseAmountError::Decimal {
            input: s.to_string(),
            source,
        })
}

/// Parses a contract type code for the command line.
pub fn parse_contract(s: &str) -> Result<ContractType, String> {
    ContractType::parse(s).ok_or_else(|| format!("unknown contract type '{s}' (expected CLT or PJ)"))
}
