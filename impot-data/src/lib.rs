mod loader;
mod runner;

pub use loader::{ScenarioLoader, ScenarioLoaderError, ScenarioRecord};
pub use runner::{ScenarioOutcome, ScenarioReport, ScenarioResult, run_scenarios};
