//! Plain-text rendering of comparison results.
//!
//! Amounts are rounded to cents here, for display only; the engine's
//! figures are never altered.

use std::fmt;

use rust_decimal::Decimal;
use salary_core::calculations::common::round_half_up;
use salary_core::calculations::DeductionMethod;
use salary_core::{ComparisonResult, RegimeResult};

fn money(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

fn signed_money(value: Decimal) -> String {
    let rounded = round_half_up(value);
    if rounded > Decimal::ZERO {
        format!("+{rounded:.2}")
    } else {
        format!("{rounded:.2}")
    }
}

fn method(result: &RegimeResult) -> &'static str {
    match result.deduction_method {
        DeductionMethod::Itemized => "itemized",
        DeductionMethod::Simplified => "simplified",
    }
}

/// Side-by-side table for a single comparison.
pub struct ComparisonReport<'a>(pub &'a ComparisonResult);

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.0;
        let (current, projected) = (&result.current, &result.projected);

        writeln!(f, "{:<18}{:>14}", "Gross salary", money(result.gross))?;
        writeln!(f, "{:<18}{:>14}", "Other deductions", money(result.other_deductions))?;
        writeln!(f)?;
        writeln!(f, "{:<18}{:>14}{:>14}", "", current.regime, projected.regime)?;

        let rows = [
            ("Contribution", money(current.contribution), money(projected.contribution)),
            ("Income tax", money(current.tax), money(projected.tax)),
            (
                "Tax rate (%)",
                current.tax_rate_percent.to_string(),
                projected.tax_rate_percent.to_string(),
            ),
            ("Reduction", money(current.reduction_applied), money(projected.reduction_applied)),
            ("Taxable base", money(current.taxable_base), money(projected.taxable_base)),
            ("Deduction", method(current).to_string(), method(projected).to_string()),
            ("Net salary", money(current.net), money(projected.net)),
        ];
        for (label, left, right) in rows {
            writeln!(f, "{label:<18}{left:>14}{right:>14}")?;
        }

        writeln!(f)?;
        write!(f, "{:<18}{:>14}", "Net difference", signed_money(result.net_difference()))
    }
}

/// Header line for [`BatchRow`] output.
pub const BATCH_HEADER: &str = "row,gross,current_net,projected_net,net_difference";

/// One CSV line of batch output.
pub struct BatchRow<'a> {
    pub row: usize,
    pub result: &'a ComparisonResult,
}

impl fmt::Display for BatchRow<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.row,
            money(self.result.gross),
            money(self.result.current.net),
            money(self.result.projected.net),
            signed_money(self.result.net_difference()),
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use salary_core::{CalculationInput, ContractType, compare_regimes};

    use super::*;

    fn result_for(gross: Decimal) -> ComparisonResult {
        let input = CalculationInput::for_contract(gross, ContractType::Clt, 0, dec!(0));
        compare_regimes(&input).unwrap()
    }

    #[test]
    fn money_rounds_to_cents() {
        assert_eq!(money(dec!(509.597)), "509.60");
        assert_eq!(money(dec!(0)), "0.00");
    }

    #[test]
    fn signed_money_marks_gains() {
        assert_eq!(signed_money(dec!(320.9726)), "+320.97");
        assert_eq!(signed_money(dec!(-1.5)), "-1.50");
        assert_eq!(signed_money(dec!(0)), "0.00");
    }

    #[test]
    fn report_lists_both_regimes() {
        let report = ComparisonReport(&result_for(dec!(5000.00))).to_string();

        assert!(report.contains("current"));
        assert!(report.contains("projected"));
        assert!(report.contains("4177.51"));
        assert!(report.contains("4498.49"));
        assert!(report.ends_with("+320.97"));
    }

    #[test]
    fn batch_row_is_comma_separated() {
        let result = result_for(dec!(5000.00));
        let row = BatchRow {
            row: 1,
            result: &result,
        };

        assert_eq!(row.to_string(), "1,5000.00,4177.51,4498.49,+320.97");
    }
}
