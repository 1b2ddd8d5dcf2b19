use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ContributionBracket, IncomeTaxBracket};

/// Errors reported by [`Regime::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegimeError {
    #[error("regime '{0}' has no contribution brackets")]
    EmptyContributionTable(String),

    #[error("regime '{0}' has no income tax brackets")]
    EmptyIncomeTaxTable(String),

    /// Bracket limits must be positive and strictly increasing.
    #[error("bracket {index} limit {limit} does not exceed the previous limit")]
    NonIncreasingLimit { index: usize, limit: Decimal },

    #[error("bracket rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    #[error("income tax bracket deduction must be non-negative, got {0}")]
    NegativeBracketDeduction(Decimal),

    /// Only the last income tax bracket may leave its limit open.
    #[error("income tax bracket {0} is unbounded but is not the last bracket")]
    UnboundedBracketNotLast(usize),

    #[error("the last income tax bracket must be unbounded")]
    BoundedTopBracket,

    #[error("deduction constant must be non-negative, got {0}")]
    NegativeDeduction(Decimal),

    #[error(
        "reduction phase-out limit {phase_out_limit} must exceed the full exemption limit {full_exemption_limit}"
    )]
    InvalidReductionThresholds {
        full_exemption_limit: Decimal,
        phase_out_limit: Decimal,
    },
}

/// Flat deduction constants used when choosing the taxable base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeductionRules {
    /// Amount deducted per dependent on the itemized path.
    pub per_dependent: Decimal,

    /// Flat amount deducted on the simplified path, regardless of dependents.
    pub simplified: Decimal,
}

/// Post-tax reduction applied by regimes that carry one.
///
/// | Gross salary                                  | Reduction                          |
/// |-----------------------------------------------|------------------------------------|
/// | `<= full_exemption_limit`                     | the whole theoretical tax          |
/// | `<= phase_out_limit`                          | `phase_out_base - phase_out_factor * gross` |
/// | above                                         | none                               |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReductionRule {
    pub full_exemption_limit: Decimal,
    pub phase_out_limit: Decimal,
    pub phase_out_base: Decimal,
    pub phase_out_factor: Decimal,
}

/// A named, immutable set of contribution and income tax rules.
///
/// A regime has a reduction flag exactly when `reduction` is `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Regime {
    pub name: String,
    pub contribution_brackets: Vec<ContributionBracket>,
    pub income_tax_brackets: Vec<IncomeTaxBracket>,
    pub deductions: DeductionRules,
    #[serde(default)]
    pub reduction: Option<ReductionRule>,
}

impl Regime {
    /// Checks the structural invariants of every table in the regime.
    ///
    /// # Errors
    ///
    /// Returns [`RegimeError`] if:
    /// - either bracket table is empty
    /// - limits are not positive and strictly increasing
    /// - a rate lies outside `[0, 1]`
    /// - a deduction constant is negative
    /// - the income tax table is not open-ended in exactly its last bracket
    /// - the reduction phase-out limit does not exceed its exemption limit
    pub fn validate(&self) -> Result<(), RegimeError> {
        if self.contribution_brackets.is_empty() {
            return Err(RegimeError::EmptyContributionTable(self.name.clone()));
        }
        if self.income_tax_brackets.is_empty() {
            return Err(RegimeError::EmptyIncomeTaxTable(self.name.clone()));
        }

        let mut previous = Decimal::ZERO;
        for (index, bracket) in self.contribution_brackets.iter().enumerate() {
            validate_rate(bracket.rate)?;
            if bracket.limit <= previous {
                return Err(RegimeError::NonIncreasingLimit {
                    index,
                    limit: bracket.limit,
                });
            }
            previous = bracket.limit;
        }

        let last = self.income_tax_brackets.len() - 1;
        let mut previous = Decimal::ZERO;
        for (index, bracket) in self.income_tax_brackets.iter().enumerate() {
            validate_rate(bracket.rate)?;
            if bracket.deduction < Decimal::ZERO {
                return Err(RegimeError::NegativeBracketDeduction(bracket.deduction));
            }
            match bracket.limit {
                Some(_) if index == last => return Err(RegimeError::BoundedTopBracket),
                Some(limit) if limit <= previous => {
                    return Err(RegimeError::NonIncreasingLimit { index, limit });
                }
                Some(limit) => previous = limit,
                None if index != last => return Err(RegimeError::UnboundedBracketNotLast(index)),
                None => {}
            }
        }

        for amount in [self.deductions.per_dependent, self.deductions.simplified] {
            if amount < Decimal::ZERO {
                return Err(RegimeError::NegativeDeduction(amount));
            }
        }

        if let Some(rule) = &self.reduction {
            if rule.full_exemption_limit < Decimal::ZERO
                || rule.phase_out_limit <= rule.full_exemption_limit
            {
                return Err(RegimeError::InvalidReductionThresholds {
                    full_exemption_limit: rule.full_exemption_limit,
                    phase_out_limit: rule.phase_out_limit,
                });
            }
        }

        Ok(())
    }
}

fn validate_rate(rate: Decimal) -> Result<(), RegimeError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(RegimeError::InvalidRate(rate));
    }
    Ok(())
}

/// The pair of regimes a comparison runs against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeSet {
    pub current: Regime,
    pub projected: Regime,
}

impl RegimeSet {
    pub fn validate(&self) -> Result<(), RegimeError> {
        self.current.validate()?;
        self.projected.validate()
    }
}

impl Default for RegimeSet {
    fn default() -> Self {
        Self {
            current: Regime::current(),
            projected: Regime::projected(),
        }
    }
}
