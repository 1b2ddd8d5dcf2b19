//! CSV loader for batches of salary inputs.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column             | Required | Type    | Default |
//! |--------------------|----------|---------|---------|
//! | `gross_salary`     | yes      | decimal |         |
//! | `contract_type`    | no       | string  | `CLT`   |
//! | `dependents`       | no       | integer | `0`     |
//! | `other_deductions` | no       | decimal | `0`     |
//!
//! `contract_type` is `CLT` or `PJ`, in any case.
//!
//! ```csv
//! gross_salary,contract_type,dependents,other_deductions
//! 5000.00,CLT,0,0
//! 6000.00,PJ,2,150.00
//! 3200.00,,,
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use salary_core::{CalculationInput, ContractType};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a batch file.
#[derive(Debug, Error)]
pub enum BatchLoadError {
    #[error("cannot read batch file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bad structure, a missing required column, or a type mismatch.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, not counting the header.
    #[error("unrecognised contract type '{value}' on row {row}")]
    InvalidContractType { value: String, row: usize },
}

/// Decimal columns are read from the raw text, never through `f64`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(with = "rust_decimal::serde::str")]
    gross_salary: Decimal,
    contract_type: Option<String>,
    dependents: Option<u32>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    other_deductions: Option<Decimal>,
}

/// Loader for [`CalculationInput`] batches.
pub struct BatchLoader;

impl BatchLoader {
    /// Parses CSV text into inputs, in file order.
    ///
    /// Range checks are left to the engine; a negative salary here parses
    /// and is rejected when it is compared.
    pub fn parse(input: &str) -> Result<Vec<CalculationInput>, BatchLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(input.as_bytes());

        let inputs = reader
            .deserialize::<CsvRow>()
            .enumerate()
            .map(|(idx, result)| convert_row(result?, idx + 1))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rows = inputs.len(), "parsed batch");
        Ok(inputs)
    }

    /// Reads `path` and delegates to [`BatchLoader::parse`].
    pub fn load(path: &Path) -> Result<Vec<CalculationInput>, BatchLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| BatchLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<CalculationInput, BatchLoadError> {
    let contract = match row.contract_type.as_deref().map(str::trim) {
        None | Some("") => ContractType::default(),
        Some(value) => {
            ContractType::parse(value).ok_or_else(|| BatchLoadError::InvalidContractType {
                value: value.to_string(),
                row: row_number,
            })?
        }
    };

    Ok(CalculationInput::for_contract(
        row.gross_salary,
        contract,
        row.dependents.unwrap_or(0),
        row.other_deductions.unwrap_or(Decimal::ZERO),
    ))
}
