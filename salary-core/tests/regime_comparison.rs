//! End-to-end scenarios through the public comparison API.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salary_core::calculations::{DeductionMethod, SalaryComparison};
use salary_core::tables::INCOME_TAX_BRACKETS;
use salary_core::{
    CalculationInput, ContractType, ContributionBracket, DeductionRules, Regime, RegimeSet,
    compare_regimes,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("salary_core=debug")
        .try_init();
}

fn clt(
    gross: Decimal,
    dependents: u32,
) -> CalculationInput {
    CalculationInput::for_contract(gross, ContractType::Clt, dependents, dec!(0))
}

#[test]
fn low_salary_owes_no_income_tax_in_either_regime() {
    init_tracing();

    let result = compare_regimes(&clt(dec!(1518.00), 0)).unwrap();

    assert_eq!(result.current.contribution, dec!(113.85));
    assert_eq!(result.current.tax, Decimal::ZERO);
    assert_eq!(result.current.tax_rate_percent, Decimal::ZERO);
    assert_eq!(result.projected.tax, Decimal::ZERO);
    assert_eq!(result.projected.reduction_applied, Decimal::ZERO);
}

#[test]
fn projected_regime_exempts_salary_up_to_five_thousand() {
    init_tracing();

    for gross in [dec!(2500.00), dec!(3500.00), dec!(4000.00), dec!(4999.99), dec!(5000.00)] {
        let result = compare_regimes(&clt(gross, 0)).unwrap();

        assert_eq!(result.projected.tax, Decimal::ZERO, "gross {gross}");
        assert_eq!(
            result.projected.net,
            gross - result.projected.contribution,
            "gross {gross}"
        );
    }
}

#[test]
fn phase_out_salary_pays_reduced_tax() {
    init_tracing();

    let result = compare_regimes(&clt(dec!(6000.00), 0)).unwrap();

    assert_eq!(result.projected.contribution, dec!(641.5144));
    assert_eq!(result.projected.deduction_method, DeductionMethod::Itemized);
    assert_eq!(result.projected.reduction_applied, dec!(179.75));
    assert_eq!(result.projected.tax, dec!(385.10));
    assert!(result.projected.tax < result.current.tax);
}

#[test]
fn high_salary_gets_no_reduction() {
    init_tracing();

    let result = compare_regimes(&clt(dec!(10000.00), 0)).unwrap();

    assert_eq!(result.projected.contribution, dec!(988.0914));
    assert_eq!(result.projected.reduction_applied, Decimal::ZERO);
    assert_eq!(result.projected.tax, dec!(1569.54));
    assert_eq!(result.projected.tax_rate_percent, dec!(27.5));
}

#[test]
fn dependents_switch_to_itemized_deduction() {
    init_tracing();

    let none = compare_regimes(&clt(dec!(5000.00), 0)).unwrap();
    let five = compare_regimes(&clt(dec!(5000.00), 5)).unwrap();

    assert_eq!(none.current.deduction_method, DeductionMethod::Simplified);
    assert_eq!(none.current.taxable_base, dec!(4392.80));
    assert_eq!(five.current.deduction_method, DeductionMethod::Itemized);
    assert_eq!(five.current.taxable_base, dec!(3542.453));
    assert_eq!(five.current.tax, dec!(137.21));
}

#[test]
fn contractor_keeps_full_gross_before_tax() {
    init_tracing();

    let input = CalculationInput::for_contract(dec!(5000.00), ContractType::Pj, 0, dec!(0));
    let result = compare_regimes(&input).unwrap();

    // Without contribution, the itemized base is the whole gross, so the
    // simplified deduction wins: 4392.80 × 22.5% - 675.49.
    assert_eq!(result.current.contribution, Decimal::ZERO);
    assert_eq!(result.current.tax, dec!(312.89));
    assert_eq!(result.current.net, dec!(4687.11));
    assert_eq!(result.projected.net, dec!(5000.00));
}

#[test]
fn injected_flat_regime_is_used_as_given() {
    init_tracing();

    let flat = Regime {
        name: "flat".to_string(),
        contribution_brackets: vec![ContributionBracket {
            limit: dec!(10000),
            rate: dec!(0.10),
        }],
        income_tax_brackets: INCOME_TAX_BRACKETS.to_vec(),
        deductions: DeductionRules {
            per_dependent: dec!(0),
            simplified: dec!(0),
        },
        reduction: None,
    };
    let regimes = RegimeSet {
        current: flat.clone(),
        projected: flat,
    };

    let result = SalaryComparison::new(&regimes)
        .compare(&clt(dec!(3000.00), 0))
        .unwrap();

    // Contribution 300; both bases 3000 or 2700, the smaller is 2700:
    // 2700 × 7.5% - 182.16 = 20.34
    assert_eq!(result.current.contribution, dec!(300.00));
    assert_eq!(result.current.taxable_base, dec!(2700.00));
    assert_eq!(result.current.tax, dec!(20.34));
    assert_eq!(result.current, result.projected);
}
