//! Progressive income tax with the deduction choice and regime reduction.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Itemized base: gross - contribution - dependents × per-dependent value |
//! | 2    | Simplified base: gross - flat simplified deduction |
//! | 3    | Taxable base: smaller of step 1 and step 2 |
//! | 4    | Theoretical tax: base × tier rate - tier deduction (minimum 0) |
//! | 5    | Reduction from gross salary, when the regime carries one |
//! | 6    | Final tax: step 4 - step 5 (minimum 0), rounded to cents |
//!
//! Only one tier applies in step 4. Its deduction constant already encodes
//! the effect of the lower tiers, so no cumulative walk is needed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::Regime;
//! use salary_core::calculations::{DeductionMethod, IncomeTaxCalculator};
//!
//! let regime = Regime::projected();
//! let calculator = IncomeTaxCalculator::new(&regime);
//!
//! let result = calculator.calculate(dec!(6000.00), dec!(641.5144), 0).unwrap();
//!
//! assert_eq!(result.deduction_method, DeductionMethod::Itemized);
//! assert_eq!(result.rate_percent, dec!(27.5));
//! // 978.62 - 0.133145 × 6000
//! assert_eq!(result.reduction, dec!(179.75));
//! assert_eq!(result.value, dec!(385.10));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{non_negative, round_half_up};
use crate::{IncomeTaxBracket, ReductionRule, Regime};

/// Errors that can occur while looking up the income tax tier.
///
/// A regime that passed [`Regime::validate`] never produces either.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncomeTaxError {
    #[error("no income tax brackets provided")]
    NoTaxBrackets,

    #[error("no income tax bracket found for taxable base {0}")]
    NoMatchingBracket(Decimal),
}

/// Which deduction path produced the taxable base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionMethod {
    /// Contribution plus a fixed amount per dependent.
    Itemized,
    /// Flat deduction independent of dependents.
    Simplified,
}

/// Result of the income tax calculation for one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxResult {
    /// Final tax after the reduction, rounded to cents.
    pub value: Decimal,

    /// Marginal rate of the matched tier as a percentage, for display.
    pub rate_percent: Decimal,

    /// Reduction applied, rounded to cents. Zero when the regime has none.
    pub reduction: Decimal,

    /// Taxable base the tier was looked up with.
    pub taxable_base: Decimal,

    pub deduction_method: DeductionMethod,
}

/// Calculator for the income tax owed under one regime.
#[derive(Debug, Clone, Copy)]
pub struct IncomeTaxCalculator<'a> {
    regime: &'a Regime,
}

impl<'a> IncomeTaxCalculator<'a> {
    pub fn new(regime: &'a Regime) -> Self {
        Self { regime }
    }

    /// Calculates the income tax for `gross_salary`.
    ///
    /// `contribution` is the amount returned by the contribution calculator
    /// for the same regime.
    ///
    /// # Errors
    ///
    /// Returns [`IncomeTaxError`] if the regime has no income tax brackets or
    /// none of them contains the taxable base.
    pub fn calculate(
        &self,
        gross_salary: Decimal,
        contribution: Decimal,
        dependents: u32,
    ) -> Result<IncomeTaxResult, IncomeTaxError> {
        if self.regime.income_tax_brackets.is_empty() {
            return Err(IncomeTaxError::NoTaxBrackets);
        }

        let (taxable_base, deduction_method) =
            self.taxable_base(gross_salary, contribution, dependents);

        let (theoretical_tax, rate_percent) = self.theoretical_tax(taxable_base)?;

        let reduction = non_negative(self.reduction(gross_salary, theoretical_tax));

        let value = round_half_up(non_negative(theoretical_tax - reduction));

        debug!(
            regime = %self.regime.name,
            %taxable_base,
            ?deduction_method,
            %theoretical_tax,
            %reduction,
            tax = %value,
            "income tax calculated"
        );

        Ok(IncomeTaxResult {
            value,
            rate_percent,
            reduction: round_half_up(reduction),
            taxable_base,
            deduction_method,
        })
    }

    /// Picks the smaller of the itemized and simplified bases.
    ///
    /// The simplified path wins ties.
    fn taxable_base(
        &self,
        gross_salary: Decimal,
        contribution: Decimal,
        dependents: u32,
    ) -> (Decimal, DeductionMethod) {
        let deductions = &self.regime.deductions;
        let itemized =
            gross_salary - contribution - Decimal::from(dependents) * deductions.per_dependent;
        let simplified = gross_salary - deductions.simplified;

        if itemized < simplified {
            (itemized, DeductionMethod::Itemized)
        } else {
            (simplified, DeductionMethod::Simplified)
        }
    }

    /// Tax from the single tier containing `taxable_base`, with its rate.
    ///
    /// Unrounded; a base of zero or less owes nothing at a rate of zero.
    fn theoretical_tax(
        &self,
        taxable_base: Decimal,
    ) -> Result<(Decimal, Decimal), IncomeTaxError> {
        if taxable_base <= Decimal::ZERO {
            return Ok((Decimal::ZERO, Decimal::ZERO));
        }

        let bracket = self.bracket_for(taxable_base)?;
        let tax = non_negative(taxable_base * bracket.rate - bracket.deduction);

        Ok((tax, bracket.rate_percent()))
    }

    fn bracket_for(
        &self,
        taxable_base: Decimal,
    ) -> Result<&'a IncomeTaxBracket, IncomeTaxError> {
        self.regime
            .income_tax_brackets
            .iter()
            .find(|bracket| bracket.contains(taxable_base))
            .ok_or(IncomeTaxError::NoMatchingBracket(taxable_base))
    }

    /// Reduction owed under the regime's rule, keyed on gross salary.
    ///
    /// Unclamped; the phase-out formula is returned as computed.
    fn reduction(
        &self,
        gross_salary: Decimal,
        theoretical_tax: Decimal,
    ) -> Decimal {
        match &self.regime.reduction {
            None => Decimal::ZERO,
            Some(rule) => reduction_for(rule, gross_salary, theoretical_tax),
        }
    }
}

fn reduction_for(
    rule: &ReductionRule,
    gross_salary: Decimal,
    theoretical_tax: Decimal,
) -> Decimal {
    if gross_salary <= rule.full_exemption_limit {
        theoretical_tax
    } else if gross_salary <= rule.phase_out_limit {
        rule.phase_out_base - rule.phase_out_factor * gross_salary
    } else {
        Decimal::ZERO
    }
}

/// Income tax for `gross_salary` under `regime`.
///
/// Shorthand for [`IncomeTaxCalculator::calculate`].
pub fn compute_income_tax(
    gross_salary: Decimal,
    contribution: Decimal,
    dependents: u32,
    regime: &Regime,
) -> Result<IncomeTaxResult, IncomeTaxError> {
    IncomeTaxCalculator::new(regime).calculate(gross_salary, contribution, dependents)
}
