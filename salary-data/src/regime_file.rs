//! TOML regime overrides.
//!
//! A regime file may define `[current]`, `[projected]`, both, or neither.
//! Whichever section is missing falls back to the built-in regime. Monetary
//! values and rates are written as strings so they parse exactly.
//!
//! ```toml
//! [projected]
//! name = "projected"
//!
//! [projected.deductions]
//! per_dependent = "189.59"
//! simplified = "607.20"
//!
//! [projected.reduction]
//! full_exemption_limit = "5000.00"
//! phase_out_limit = "7350.00"
//! phase_out_base = "978.62"
//! phase_out_factor = "0.133145"
//!
//! [[projected.contribution_brackets]]
//! limit = "1621.00"
//! rate = "0.075"
//!
//! [[projected.income_tax_brackets]]
//! limit = "2428.80"
//! rate = "0"
//!
//! [[projected.income_tax_brackets]]
//! rate = "0.275"
//! deduction = "908.73"
//! ```

use std::path::Path;

use salary_core::{Regime, RegimeError, RegimeSet};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading a regime file.
#[derive(Debug, Error)]
pub enum RegimeFileError {
    #[error("cannot read regime file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid regime: {0}")]
    Invalid(#[from] RegimeError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegimeFile {
    current: Option<Regime>,
    projected: Option<Regime>,
}

/// Loader for [`RegimeSet`] overrides.
pub struct RegimeFileLoader;

impl RegimeFileLoader {
    /// Parses TOML text into a validated regime set.
    ///
    /// # Errors
    ///
    /// * [`RegimeFileError::Parse`] if the TOML is malformed or a field has
    ///   the wrong type.
    /// * [`RegimeFileError::Invalid`] if a regime breaks its table invariants.
    pub fn parse(input: &str) -> Result<RegimeSet, RegimeFileError> {
        let file: RegimeFile = toml::from_str(input)?;
        let defaults = RegimeSet::default();

        let current = file.current.unwrap_or_else(|| {
            debug!("no [current] section, using built-in regime");
            defaults.current
        });
        let projected = file.projected.unwrap_or_else(|| {
            debug!("no [projected] section, using built-in regime");
            defaults.projected
        });

        let regimes = RegimeSet { current, projected };
        regimes.validate()?;

        Ok(regimes)
    }

    /// Reads `path` and delegates to [`RegimeFileLoader::parse`].
    pub fn load(path: &Path) -> Result<RegimeSet, RegimeFileError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RegimeFileError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let regimes = Self::parse(&contents)?;
        info!(
            path = %path.display(),
            current = %regimes.current.name,
            projected = %regimes.projected.name,
            "loaded regime file"
        );

        Ok(regimes)
    }
}
