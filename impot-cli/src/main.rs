use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use tracing::{debug, info};

use impot_cli::household_file::load_household;
use impot_cli::logging::{LoggingConfig, init_logging};
use impot_cli::report::{render, render_parameters};
use impot_core::{FamilySituation, Household, IncomeTaxParameters, IncomeTaxWorksheet};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// French income tax simulator (2024 return on 2023 income).
///
/// Computes the net tax of a household and prints every intermediate value
/// of the calculation.
#[derive(Debug, Parser)]
#[command(name = "simulateur", version)]
struct Cli {
    #[command(flatten)]
    household: HouseholdArgs,

    /// Print the statutory parameters as TOML and exit.
    #[arg(long, conflicts_with_all = ["household", "income1", "situation"])]
    print_parameters: bool,

    /// Log level or filter directive; overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct HouseholdArgs {
    /// Read the household from a TOML file instead of flags.
    #[arg(long, conflicts_with_all = ["income1", "income2", "situation", "children", "disabled_children", "isolated_parent"])]
    household: Option<PathBuf>,

    /// Net taxable income of the first declarant, in euros.
    #[arg(long, allow_hyphen_values = true, required_unless_present_any = ["household", "print_parameters"])]
    income1: Option<i64>,

    /// Net taxable income of the second declarant (couples only).
    #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
    income2: i64,

    /// CELIBATAIRE, PACSE, MARIE, DIVORCE or VEUF.
    #[arg(long, value_parser = parse_situation)]
    situation: Option<FamilySituation>,

    /// Dependent children, disabled ones included.
    #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
    children: i32,

    /// Dependent children with a disability.
    #[arg(long, allow_hyphen_values = true, default_value_t = 0)]
    disabled_children: i32,

    /// Raising the children alone (case T).
    #[arg(long, default_value_t = false)]
    isolated_parent: bool,
}

fn parse_situation(s: &str) -> Result<FamilySituation, String> {
    FamilySituation::parse(s).ok_or_else(|| {
        format!("unknown situation '{s}'; expected CELIBATAIRE, PACSE, MARIE, DIVORCE or VEUF")
    })
}

impl HouseholdArgs {
    fn household(&self) -> Result<Household> {
        if let Some(path) = &self.household {
            return Ok(load_household(path)?);
        }

        Ok(Household {
            income_declarant1: self.income1.unwrap_or_default(),
            income_declarant2: self.income2,
            situation: self.situation,
            children: self.children,
            disabled_children: self.disabled_children,
            isolated_parent: self.isolated_parent,
        })
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
        log_file: cli.log_file.clone(),
    })?;

    let params = IncomeTaxParameters::impots_2024();

    if cli.print_parameters {
        let text = render_parameters(&params).context("cannot serialize parameters")?;
        print!("{text}");
        return Ok(());
    }

    let household = cli.household.household()?;
    debug!(?household, "household loaded");

    // A missing --situation is reported by the engine like any other invalid input.
    let computation = IncomeTaxWorksheet::new(&params)
        .calculate(&household)
        .context("household rejected")?;
    info!(net_tax = %computation.net_tax, "computation complete");

    print!("{}", render(&computation));

    Ok(())
}
