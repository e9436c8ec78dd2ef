use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use impot_core::IncomeTaxParameters;
use impot_data::{ScenarioLoader, run_scenarios};
use tracing_subscriber::EnvFilter;

/// Check a scenario file against the income tax engine.
///
/// The CSV file should have the following columns:
/// - revenuNetDeclarant1, revenuNetDeclarant2: net incomes in euros
/// - situationFamiliale: CELIBATAIRE, PACSE, MARIE, DIVORCE or VEUF
/// - nbEnfantsACharge, nbEnfantsSituationHandicap: children counts
/// - parentIsole: true or false
/// - impotAttendu: expected net tax in euros
#[derive(Parser, Debug)]
#[command(name = "impot-scenarios")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing the scenarios
    #[arg(short, long)]
    file: PathBuf,

    /// Also print scenarios that matched
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = ScenarioLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} scenarios from {}", records.len(), args.file.display());

    let report = run_scenarios(&records, &IncomeTaxParameters::impots_2024());

    for result in &report.results {
        if args.verbose || !result.outcome.is_match() {
            println!("row {:>4}: {}", result.record.row, result.outcome);
        }
    }

    println!("{} passed, {} failed", report.passed(), report.failed());

    if !report.is_success() {
        bail!("{} scenario(s) failed", report.failed());
    }

    Ok(())
}
