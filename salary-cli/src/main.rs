use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use salary_cli::logging::init_logging;
use salary_cli::report::{BATCH_HEADER, BatchRow, ComparisonReport};
use salary_cli::utils::{parse_amount, parse_contract};
use salary_core::calculations::SalaryComparison;
use salary_core::{CalculationInput, ContractType, RegimeSet};
use salary_data::{BatchLoader, RegimeFileLoader};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Net salary under the current and the projected payroll tax rules.
#[derive(Debug, Parser)]
#[command(name = "salary-compare", version, about, long_about = None)]
struct Cli {
    /// TOML file overriding the built-in regime tables.
    #[arg(long, global = true)]
    regimes: Option<PathBuf>,

    /// Append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log calculation details (ignored when RUST_LOG is set).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare a single salary.
    Compare {
        /// Gross monthly salary, e.g. 5000.00 or 5.000,00.
        #[arg(long, value_parser = parse_amount)]
        gross: Decimal,

        /// Contract type: CLT (contribution-liable) or PJ (exempt).
        #[arg(long, default_value = "CLT", value_parser = parse_contract)]
        contract: ContractType,

        /// Number of dependents.
        #[arg(long, default_value_t = 0)]
        dependents: u32,

        /// Other deductions taken from net salary.
        #[arg(long, default_value = "0", value_parser = parse_amount)]
        other: Decimal,
    },

    /// Compare every row of a CSV file and print one CSV line per row.
    Batch {
        /// CSV with gross_salary and optional contract_type, dependents,
        /// other_deductions columns.
        #[arg(short, long)]
        file: PathBuf,
    },
}

// ─── commands ────────────────────────────────────────────────────────────────

fn load_regimes(path: Option<&Path>) -> Result<RegimeSet> {
    match path {
        Some(path) => RegimeFileLoader::load(path)
            .with_context(|| format!("Failed to load regimes from: {}", path.display())),
        None => {
            debug!("using built-in regimes");
            Ok(RegimeSet::default())
        }
    }
}

fn run_compare(
    regimes: &RegimeSet,
    input: CalculationInput,
) -> Result<()> {
    let result = SalaryComparison::new(regimes)
        .compare(&input)
        .context("Failed to compare regimes")?;

    println!("{}", ComparisonReport(&result));
    Ok(())
}

fn run_batch(
    regimes: &RegimeSet,
    file: &Path,
) -> Result<()> {
    let inputs = BatchLoader::load(file)
        .with_context(|| format!("Failed to load batch: {}", file.display()))?;
    info!(rows = inputs.len(), file = %file.display(), "loaded batch");

    let comparison = SalaryComparison::new(regimes);
    let mut failed = 0usize;

    println!("{BATCH_HEADER}");
    for (idx, input) in inputs.iter().enumerate() {
        let row = idx + 1;
        match comparison.compare(input) {
            Ok(result) => println!("{}", BatchRow { row, result: &result }),
            Err(error) => {
                failed += 1;
                warn!(row, %error, "skipping row");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} rows could not be compared", inputs.len());
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let regimes = load_regimes(cli.regimes.as_deref())?;

    match cli.command {
        Command::Compare {
            gross,
            contract,
            dependents,
            other,
        } => run_compare(
            &regimes,
            CalculationInput::for_contract(gross, contract, dependents, other),
        ),
        Command::Batch { file } => run_batch(&regimes, &file),
    }
}
