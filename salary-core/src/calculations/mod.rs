//! Calculators for the payroll contribution, the income tax and the
//! comparison of both regimes.
//!
//! The contribution calculator feeds the income tax calculator; the
//! comparison runs that pipeline once per regime.

pub mod common;
pub mod comparison;
pub mod contribution;
pub mod income_tax;

pub use comparison::{
    CalculationError, ComparisonResult, RegimeResult, SalaryComparison, compare_regimes,
};
pub use contribution::{ContributionCalculator, compute_contribution};
pub use income_tax::{
    DeductionMethod, IncomeTaxCalculator, IncomeTaxError, IncomeTaxResult, compute_income_tax,
};
