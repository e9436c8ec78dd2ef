//! Runs scenario records through the income tax worksheet.

use impot_core::{HouseholdError, IncomeTaxParameters, IncomeTaxWorksheet};
use tracing::{debug, warn};

use crate::loader::ScenarioRecord;

/// What happened to one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioOutcome {
    Matched,
    Mismatch { expected: i64, actual: i64 },
    /// The engine refused the household.
    Rejected(HouseholdError),
    /// The row could not be turned into a household.
    Unparseable(String),
}

impl ScenarioOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched)
    }
}

impl std::fmt::Display for ScenarioOutcome {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Matched => f.write_str("ok"),
            Self::Mismatch { expected, actual } => {
                write!(f, "expected {expected}, computed {actual}")
            }
            Self::Rejected(error) => write!(f, "rejected: {error}"),
            Self::Unparseable(message) => write!(f, "unparseable: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub record: ScenarioRecord,
    pub outcome: ScenarioOutcome,
}

/// Outcomes of a scenario file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioReport {
    pub results: Vec<ScenarioResult>,
}

impl ScenarioReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_match()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.results.iter().filter(|r| !r.outcome.is_match())
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Computes every record and compares its net tax with the expected one.
pub fn run_scenarios(
    records: &[ScenarioRecord],
    params: &IncomeTaxParameters,
) -> ScenarioReport {
    let worksheet = IncomeTaxWorksheet::new(params);

    let results = records
        .iter()
        .map(|record| {
            let outcome = run_one(&worksheet, record);
            if outcome.is_match() {
                debug!(row = record.row, "scenario matched");
            } else {
                warn!(row = record.row, %outcome, "scenario failed");
            }
            ScenarioResult {
                record: record.clone(),
                outcome,
            }
        })
        .collect();

    ScenarioReport { results }
}

fn run_one(
    worksheet: &IncomeTaxWorksheet<'_>,
    record: &ScenarioRecord,
) -> ScenarioOutcome {
    let household = match record.household() {
        Ok(household) => household,
        Err(error) => return ScenarioOutcome::Unparseable(error.to_string()),
    };

    match worksheet.calculate(&household) {
        Ok(computation) => {
            let actual = computation.net_tax_euros();
            if actual == record.expected_tax {
                ScenarioOutcome::Matched
            } else {
                ScenarioOutcome::Mismatch {
                    expected: record.expected_tax,
                    actual,
                }
            }
        }
        Err(error) => ScenarioOutcome::Rejected(error),
    }
}
