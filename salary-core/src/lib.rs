pub mod calculations;
pub mod models;
pub mod tables;

pub use calculations::{CalculationError, ComparisonResult, RegimeResult, compare_regimes};
pub use models::*;
