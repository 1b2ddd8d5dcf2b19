use serde::{Deserialize, Serialize};

/// Employment arrangement the salary is paid under.
///
/// Only salaried (CLT) contracts are liable for the payroll contribution;
/// contractor (PJ) arrangements are exempt from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    #[default]
    Clt,
    Pj,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clt => "CLT",
            Self::Pj => "PJ",
        }
    }

    /// Parses a short code, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CLT" => Some(Self::Clt),
            "PJ" => Some(Self::Pj),
            _ => None,
        }
    }

    pub fn is_contribution_liable(&self) -> bool {
        matches!(self, Self::Clt)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_codes_in_any_case() {
        assert_eq!(ContractType::parse("CLT"), Some(ContractType::Clt));
        assert_eq!(ContractType::parse("clt"), Some(ContractType::Clt));
        assert_eq!(ContractType::parse(" pj "), Some(ContractType::Pj));
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(ContractType::parse("MEI"), None);
        assert_eq!(ContractType::parse(""), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for contract in [ContractType::Clt, ContractType::Pj] {
            assert_eq!(ContractType::parse(contract.as_str()), Some(contract));
        }
    }

    #[test]
    fn only_clt_is_contribution_liable() {
        assert!(ContractType::Clt.is_contribution_liable());
        assert!(!ContractType::Pj.is_contribution_liable());
    }
}
