//! Loads on-disk fixtures and feeds them through the comparison engine.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salary_core::calculations::SalaryComparison;
use salary_core::{CalculationInput, ContractType, Regime, RegimeSet};
use salary_data::{BatchLoader, RegimeFileLoader};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn restated_built_in_tables_match_defaults() {
    let regimes = RegimeFileLoader::load(&fixture("built_in_regimes.toml"))
        .expect("fixture should load");

    assert_eq!(regimes, RegimeSet::default());
}

#[test]
fn wider_exemption_changes_projected_tax_only() {
    let regimes = RegimeFileLoader::load(&fixture("wider_exemption.toml"))
        .expect("fixture should load");
    let input = CalculationInput::for_contract(dec!(6000.00), ContractType::Clt, 0, dec!(0));

    let result = SalaryComparison::new(&regimes).compare(&input).unwrap();

    assert_eq!(regimes.current, Regime::current());
    assert_eq!(result.projected.regime, "projected-6k");
    assert_eq!(result.projected.tax, Decimal::ZERO);
    assert!(result.current.tax > Decimal::ZERO);
}

#[test]
fn batch_fixture_loads_in_file_order() {
    let inputs = BatchLoader::load(&fixture("sample_inputs.csv")).expect("fixture should load");

    assert_eq!(inputs.len(), 3);
    assert_eq!(inputs[0].gross_salary, dec!(4000.00));
    assert_eq!(inputs[1].dependents, 2);
    assert_eq!(inputs[1].other_deductions, dec!(150.00));
    assert!(!inputs[2].is_contribution_liable);
}

#[test]
fn batch_fixture_compares_every_row() {
    let inputs = BatchLoader::load(&fixture("sample_inputs.csv")).expect("fixture should load");
    let regimes = RegimeSet::default();
    let comparison = SalaryComparison::new(&regimes);

    let results = inputs
        .iter()
        .map(|input| comparison.compare(input))
        .collect::<Result<Vec<_>, _>>()
        .expect("every fixture row is valid");

    assert_eq!(results[0].projected.tax, Decimal::ZERO);
    assert_eq!(results[2].current.contribution, Decimal::ZERO);
    for result in &results {
        assert!(result.projected.tax <= result.current.tax);
    }
}

#[test]
fn missing_batch_file_is_an_error() {
    assert!(BatchLoader::load(Path::new("/this/path/does/not/exist.csv")).is_err());
}
