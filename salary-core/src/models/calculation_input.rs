use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ContractType;

/// Errors raised when a calculation input breaks its preconditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("gross salary must be non-negative, got {0}")]
    NegativeGrossSalary(Decimal),

    #[error("other deductions must be non-negative, got {0}")]
    NegativeOtherDeductions(Decimal),
}

/// Already-parsed values for a single salary comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Gross monthly salary.
    pub gross_salary: Decimal,

    /// Whether the payroll contribution applies (false for exempt contracts).
    pub is_contribution_liable: bool,

    /// Number of dependents claimed on the itemized deduction path.
    pub dependents: u32,

    /// Miscellaneous deductions subtracted from net salary only.
    pub other_deductions: Decimal,
}

impl CalculationInput {
    /// Builds an input whose liability flag is derived from `contract`.
    pub fn for_contract(
        gross_salary: Decimal,
        contract: ContractType,
        dependents: u32,
        other_deductions: Decimal,
    ) -> Self {
        Self {
            gross_salary,
            is_contribution_liable: contract.is_contribution_liable(),
            dependents,
            other_deductions,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.gross_salary < Decimal::ZERO {
            return Err(InputError::NegativeGrossSalary(self.gross_salary));
        }
        if self.other_deductions < Decimal::ZERO {
            return Err(InputError::NegativeOtherDeductions(self.other_deductions));
        }
        Ok(())
    }
}
