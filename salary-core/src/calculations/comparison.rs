//! Side-by-side net salary under the current and projected regimes.
//!
//! Each regime runs its own contribution table through the contribution
//! calculator and then its own income tax rules; nothing computed for one
//! regime is reused by the other.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::{CalculationInput, ContractType, RegimeSet};
//! use salary_core::calculations::SalaryComparison;
//!
//! let regimes = RegimeSet::default();
//! let comparison = SalaryComparison::new(&regimes);
//! let input = CalculationInput::for_contract(dec!(5000.00), ContractType::Clt, 0, dec!(0));
//!
//! let result = comparison.compare(&input).unwrap();
//!
//! assert_eq!(result.current.tax, dec!(312.89));
//! assert_eq!(result.projected.tax, dec!(0));
//! assert_eq!(result.projected.net, dec!(5000.00) - result.projected.contribution);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::contribution::ContributionCalculator;
use super::income_tax::{DeductionMethod, IncomeTaxCalculator, IncomeTaxError};
use crate::{CalculationInput, InputError, Regime, RegimeError, RegimeSet};

/// Errors that stop a comparison before any figure is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("invalid regime: {0}")]
    InvalidRegime(#[from] RegimeError),

    #[error(transparent)]
    IncomeTax(#[from] IncomeTaxError),
}

/// Figures for one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeResult {
    /// Name of the regime the figures were computed under.
    pub regime: String,

    /// Payroll contribution, unrounded.
    pub contribution: Decimal,

    /// Income tax after reduction, rounded to cents.
    pub tax: Decimal,

    /// `gross - contribution - tax - other deductions`.
    pub net: Decimal,

    /// Marginal income tax rate as a percentage.
    pub tax_rate_percent: Decimal,

    /// Reduction subtracted from the theoretical tax, rounded to cents.
    pub reduction_applied: Decimal,

    pub taxable_base: Decimal,
    pub deduction_method: DeductionMethod,
}

/// Both regimes' figures for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub gross: Decimal,
    pub other_deductions: Decimal,
    pub current: RegimeResult,
    pub projected: RegimeResult,
}

impl ComparisonResult {
    /// How much more (or, if negative, less) the projected regime pays out.
    pub fn net_difference(&self) -> Decimal {
        self.projected.net - self.current.net
    }

    /// How much less income tax the projected regime charges.
    pub fn tax_difference(&self) -> Decimal {
        self.current.tax - self.projected.tax
    }
}

/// Runs the calculators once per regime of a [`RegimeSet`].
#[derive(Debug, Clone, Copy)]
pub struct SalaryComparison<'a> {
    regimes: &'a RegimeSet,
}

impl<'a> SalaryComparison<'a> {
    pub fn new(regimes: &'a RegimeSet) -> Self {
        Self { regimes }
    }

    /// Compares net salary under both regimes.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidInput`] for a negative gross salary
    /// or negative other deductions, and [`CalculationError::InvalidRegime`]
    /// when an injected regime breaks its table invariants.
    pub fn compare(
        &self,
        input: &CalculationInput,
    ) -> Result<ComparisonResult, CalculationError> {
        if let Err(error) = input.validate() {
            warn!(%error, "rejecting calculation input");
            return Err(error.into());
        }
        if let Err(error) = self.regimes.validate() {
            warn!(%error, "rejecting regime set");
            return Err(error.into());
        }

        let current = self.regime_result(&self.regimes.current, input)?;
        let projected = self.regime_result(&self.regimes.projected, input)?;

        debug!(
            gross = %input.gross_salary,
            current_net = %current.net,
            projected_net = %projected.net,
            "comparison assembled"
        );

        Ok(ComparisonResult {
            gross: input.gross_salary,
            other_deductions: input.other_deductions,
            current,
            projected,
        })
    }

    fn regime_result(
        &self,
        regime: &Regime,
        input: &CalculationInput,
    ) -> Result<RegimeResult, CalculationError> {
        let contribution = ContributionCalculator::new(&regime.contribution_brackets)
            .calculate(input.gross_salary, input.is_contribution_liable);

        let income_tax = IncomeTaxCalculator::new(regime).calculate(
            input.gross_salary,
            contribution,
            input.dependents,
        )?;

        let net = input.gross_salary - contribution - income_tax.value - input.other_deductions;

        Ok(RegimeResult {
            regime: regime.name.clone(),
            contribution,
            tax: income_tax.value,
            net,
            tax_rate_percent: income_tax.rate_percent,
            reduction_applied: income_tax.reduction,
            taxable_base: income_tax.taxable_base,
            deduction_method: income_tax.deduction_method,
        })
    }
}

/// Compares `input` against the built-in regimes.
pub fn compare_regimes(input: &CalculationInput) -> Result<ComparisonResult, CalculationError> {
    SalaryComparison::new(&RegimeSet::default()).compare(input)
}
