//! Progressive payroll contribution.
//!
//! Each bracket charges its rate only on the slice of salary that falls
//! between the previous bracket's limit and its own. Salary above the last
//! limit (the ceiling) is not charged at all.
//!
//! | Bracket | Slice charged                            |
//! |---------|------------------------------------------|
//! | 1       | `0 ..= limit[0]`                         |
//! | n       | `limit[n-1] ..= min(salary, limit[n])`   |
//!
//! The amount is returned unrounded; rounding is left to presentation.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::calculations::ContributionCalculator;
//! use salary_core::tables::CONTRIBUTION_BRACKETS_2025;
//!
//! let calculator = ContributionCalculator::new(&CONTRIBUTION_BRACKETS_2025);
//!
//! // 1518.00 * 7.5% + 1275.88 * 9% + 1396.95 * 12% + 809.17 * 14%
//! assert_eq!(calculator.calculate(dec!(5000.00), true), dec!(509.5970));
//! assert_eq!(calculator.calculate(dec!(5000.00), false), dec!(0));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::ContributionBracket;

/// Calculator for the bracket-by-bracket payroll contribution.
#[derive(Debug, Clone, Copy)]
pub struct ContributionCalculator<'a> {
    brackets: &'a [ContributionBracket],
}

impl<'a> ContributionCalculator<'a> {
    /// Brackets must be sorted by `limit` in ascending order.
    pub fn new(brackets: &'a [ContributionBracket]) -> Self {
        Self { brackets }
    }

    /// Salary above which nothing more is charged.
    pub fn ceiling(&self) -> Decimal {
        self.brackets
            .last()
            .map_or(Decimal::ZERO, |bracket| bracket.limit)
    }

    /// Calculates the contribution owed on `gross_salary`.
    ///
    /// Returns zero when the contract is not liable for the contribution.
    pub fn calculate(
        &self,
        gross_salary: Decimal,
        liable: bool,
    ) -> Decimal {
        if !liable {
            debug!(%gross_salary, "contract exempt from contribution");
            return Decimal::ZERO;
        }

        let capped = self.capped_salary(gross_salary);
        let mut total = Decimal::ZERO;
        let mut floor = Decimal::ZERO;

        for bracket in self.brackets {
            if capped > floor {
                total += (capped.min(bracket.limit) - floor) * bracket.rate;
            }
            if capped <= bracket.limit {
                break;
            }
            floor = bracket.limit;
        }

        debug!(%gross_salary, %capped, contribution = %total, "contribution calculated");
        total
    }

    fn capped_salary(
        &self,
        gross_salary: Decimal,
    ) -> Decimal {
        gross_salary.min(self.ceiling())
    }
}

/// Contribution for `gross_salary` under `brackets`.
///
/// Shorthand for [`ContributionCalculator::calculate`].
pub fn compute_contribution(
    gross_salary: Decimal,
    liable: bool,
    brackets: &[ContributionBracket],
) -> Decimal {
    ContributionCalculator::new(brackets).calculate(gross_salary, liable)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::tables::{CONTRIBUTION_BRACKETS_2025, CONTRIBUTION_BRACKETS_2026};

    fn calculator_2025() -> ContributionCalculator<'static> {
        ContributionCalculator::new(&CONTRIBUTION_BRACKETS_2025)
    }

    fn calculator_2026() -> ContributionCalculator<'static> {
        ContributionCalculator::new(&CONTRIBUTION_BRACKETS_2026)
    }

    // =========================================================================
    // liability tests
    // =========================================================================

    #[test]
    fn exempt_contract_pays_nothing() {
        for gross in [dec!(0), dec!(1000), dec!(5000), dec!(50000)] {
            assert_eq!(calculator_2025().calculate(gross, false), Decimal::ZERO);
        }
    }

    // =========================================================================
    // bracket walk tests
    // =========================================================================

    #[test]
    fn zero_salary_pays_nothing() {
        assert_eq!(calculator_2025().calculate(dec!(0), true), Decimal::ZERO);
    }

    #[test]
    fn salary_in_first_bracket_uses_first_rate_only() {
        let result = calculator_2025().calculate(dec!(1000.00), true);

        assert_eq!(result, dec!(1000.00) * dec!(0.075));
    }

    #[test]
    fn salary_on_first_limit_stays_in_first_bracket() {
        let result = calculator_2025().calculate(dec!(1518.00), true);

        assert_eq!(result, dec!(113.85));
    }

    #[test]
    fn one_cent_above_first_limit_charges_second_rate_on_that_cent() {
        let result = calculator_2025().calculate(dec!(1518.01), true);

        assert_eq!(result, dec!(113.85) + dec!(0.01) * dec!(0.09));
    }

    #[test]
    fn salary_in_fourth_bracket_accumulates_every_slice() {
        // 113.85 + 114.8292 + 167.634 + 113.2838
        let result = calculator_2025().calculate(dec!(5000.00), true);

        assert_eq!(result, dec!(509.5970));
    }

    #[test]
    fn projected_table_uses_its_own_limits() {
        // 121.575 + 115.3656 + 174.1716 + 90.4022
        let result = calculator_2026().calculate(dec!(5000.00), true);

        assert_eq!(result, dec!(501.5144));
    }

    #[test]
    fn result_is_not_rounded() {
        let result = calculator_2026().calculate(dec!(4000.00), true);

        // 121.575 + 115.3656 + 131.6592
        assert_eq!(result, dec!(368.5998));
    }

    // =========================================================================
    // ceiling tests
    // =========================================================================

    #[test]
    fn salary_above_ceiling_pays_ceiling_amount() {
        let at_ceiling = calculator_2025().calculate(dec!(8157.41), true);
        let above = calculator_2025().calculate(dec!(20000.00), true);

        assert_eq!(at_ceiling, dec!(951.6344));
        assert_eq!(above, at_ceiling);
    }

    #[test]
    fn ceiling_is_last_limit() {
        assert_eq!(calculator_2026().ceiling(), dec!(8475.55));
    }

    #[test]
    fn contribution_never_decreases_with_salary() {
        let calculator = calculator_2025();
        let mut previous = Decimal::ZERO;
        let mut gross = Decimal::ZERO;

        while gross <= dec!(10000) {
            let current = calculator.calculate(gross, true);
            assert!(
                current >= previous,
                "contribution dropped at {gross}: {current} < {previous}"
            );
            previous = current;
            gross += dec!(37.17);
        }
    }

    #[test]
    fn empty_table_charges_nothing() {
        let result = compute_contribution(dec!(3000), true, &[]);

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn compute_contribution_matches_calculator() {
        let result = compute_contribution(dec!(3200.00), true, &CONTRIBUTION_BRACKETS_2025);

        assert_eq!(result, calculator_2025().calculate(dec!(3200.00), true));
    }
}
