use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tier of a progressive contribution table.
///
/// The tier covers salary from the previous tier's `limit` (exclusive) up to
/// its own `limit` (inclusive). The last tier's limit is the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContributionBracket {
    pub limit: Decimal,
    pub rate: Decimal,
}

/// One tier of the income-tax table.
///
/// Tax for a base inside this tier is `base * rate - deduction`; the
/// deduction already accounts for every lower tier. `limit` is `None` for
/// the open-ended top tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncomeTaxBracket {
    pub limit: Option<Decimal>,
    pub rate: Decimal,
    #[serde(default)]
    pub deduction: Decimal,
}

impl IncomeTaxBracket {
    /// Rate expressed as a percentage, e.g. `0.275` becomes `27.5`.
    pub fn rate_percent(&self) -> Decimal {
        (self.rate * Decimal::ONE_HUNDRED).normalize()
    }

    pub fn contains(
        &self,
        base: Decimal,
    ) -> bool {
        self.limit.is_none_or(|limit| base <= limit)
    }
}
