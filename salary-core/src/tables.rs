//! Built-in contribution and income tax tables.
//!
//! The "current" regime uses the 2025 contribution table with no reduction.
//! The "projected" regime uses the 2026 contribution table and adds the
//! reduction for gross salaries up to 7,350.00. Both share one income tax
//! table and the same deduction constants.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{
    ContributionBracket, DeductionRules, IncomeTaxBracket, ReductionRule, Regime,
};

pub const CURRENT_REGIME_NAME: &str = "current";
pub const PROJECTED_REGIME_NAME: &str = "projected";

/// Deduction per dependent on the itemized path.
pub const DEPENDENT_VALUE: Decimal = dec!(189.59);

/// Flat simplified deduction.
pub const SIMPLIFIED_DEDUCTION: Decimal = dec!(607.20);

pub const CONTRIBUTION_BRACKETS_2025: [ContributionBracket; 4] = [
    ContributionBracket {
        limit: dec!(1518.00),
        rate: dec!(0.075),
    },
    ContributionBracket {
        limit: dec!(2793.88),
        rate: dec!(0.09),
    },
    ContributionBracket {
        limit: dec!(4190.83),
        rate: dec!(0.12),
    },
    ContributionBracket {
        limit: dec!(8157.41),
        rate: dec!(0.14),
    },
];

pub const CONTRIBUTION_BRACKETS_2026: [ContributionBracket; 4] = [
    ContributionBracket {
        limit: dec!(1621.00),
        rate: dec!(0.075),
    },
    ContributionBracket {
        limit: dec!(2902.84),
        rate: dec!(0.09),
    },
    ContributionBracket {
        limit: dec!(4354.27),
        rate: dec!(0.12),
    },
    ContributionBracket {
        limit: dec!(8475.55),
        rate: dec!(0.14),
    },
];

pub const INCOME_TAX_BRACKETS: [IncomeTaxBracket; 5] = [
    IncomeTaxBracket {
        limit: Some(dec!(2428.80)),
        rate: dec!(0),
        deduction: dec!(0),
    },
    IncomeTaxBracket {
        limit: Some(dec!(2826.65)),
        rate: dec!(0.075),
        deduction: dec!(182.16),
    },
    IncomeTaxBracket {
        limit: Some(dec!(3751.05)),
        rate: dec!(0.15),
        deduction: dec!(394.16),
    },
    IncomeTaxBracket {
        limit: Some(dec!(4664.68)),
        rate: dec!(0.225),
        deduction: dec!(675.49),
    },
    IncomeTaxBracket {
        limit: None,
        rate: dec!(0.275),
        deduction: dec!(908.73),
    },
];

pub const PROJECTED_REDUCTION: ReductionRule = ReductionRule {
    full_exemption_limit: dec!(5000.00),
    phase_out_limit: dec!(7350.00),
    phase_out_base: dec!(978.62),
    phase_out_factor: dec!(0.133145),
};

pub const DEDUCTIONS: DeductionRules = DeductionRules {
    per_dependent: DEPENDENT_VALUE,
    simplified: SIMPLIFIED_DEDUCTION,
};

impl Regime {
    /// Rules in force today: 2025 contribution table, no reduction.
    pub fn current() -> Self {
        Self {
            name: CURRENT_REGIME_NAME.to_string(),
            contribution_brackets: CONTRIBUTION_BRACKETS_2025.to_vec(),
            income_tax_brackets: INCOME_TAX_BRACKETS.to_vec(),
            deductions: DEDUCTIONS,
            reduction: None,
        }
    }

    /// Projected rules: 2026 contribution table with the income tax reduction.
    pub fn projected() -> Self {
        Self {
            name: PROJECTED_REGIME_NAME.to_string(),
            contribution_brackets: CONTRIBUTION_BRACKETS_2026.to_vec(),
            income_tax_brackets: INCOME_TAX_BRACKETS.to_vec(),
            deductions: DEDUCTIONS,
            reduction: Some(PROJECTED_REDUCTION),
        }
    }
}
