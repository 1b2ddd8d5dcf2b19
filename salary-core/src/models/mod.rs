mod bracket;
mod calculation_input;
mod contract_type;
mod regime;

pub use bracket::{ContributionBracket, IncomeTaxBracket};
pub use calculation_input::{CalculationInput, InputError};
pub use contract_type::ContractType;
pub use regime::{DeductionRules, ReductionRule, Regime, RegimeError, RegimeSet};
