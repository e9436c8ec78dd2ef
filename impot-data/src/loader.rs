//! Scenario fixtures: one household and its expected net tax per CSV row.
//!
//! ## CSV Format
//!
//! Columns are matched by header name; surrounding whitespace is ignored.
//!
//! | Column                       | Type    | Notes                                            |
//! |------------------------------|---------|--------------------------------------------------|
//! | `revenuNetDeclarant1`        | integer | euros                                            |
//! | `revenuNetDeclarant2`        | integer | euros, 0 outside a couple                        |
//! | `situationFamiliale`         | string  | `CELIBATAIRE`, `PACSE`, `MARIE`, `DIVORCE`, `VEUF`; empty for none |
//! | `nbEnfantsACharge`           | integer |                                                  |
//! | `nbEnfantsSituationHandicap` | integer |                                                  |
//! | `parentIsole`                | bool    | `true` / `false`                                 |
//! | `impotAttendu`               | integer | expected net tax in euros                        |
//!
//! ```csv
//! revenuNetDeclarant1,revenuNetDeclarant2,situationFamiliale,nbEnfantsACharge,nbEnfantsSituationHandicap,parentIsole,impotAttendu
//! 120000,0,MARIE,4,0,false,8270
//! ```

use std::io::Read;

use impot_core::{FamilySituation, Household};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading scenario fixtures.
#[derive(Debug, Error)]
pub enum ScenarioLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unrecognised family situation '{value}' on row {row}")]
    InvalidSituation { value: String, row: usize },
}

impl From<csv::Error> for ScenarioLoaderError {
    fn from(err: csv::Error) -> Self {
        ScenarioLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of a scenario file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioRecord {
    /// 1-based data row number (the header is row 0).
    #[serde(skip)]
    pub row: usize,

    #[serde(rename = "revenuNetDeclarant1")]
    pub income_declarant1: i64,

    #[serde(rename = "revenuNetDeclarant2")]
    pub income_declarant2: i64,

    #[serde(rename = "situationFamiliale")]
    pub situation: String,

    #[serde(rename = "nbEnfantsACharge")]
    pub children: i32,

    #[serde(rename = "nbEnfantsSituationHandicap")]
    pub disabled_children: i32,

    #[serde(rename = "parentIsole")]
    pub isolated_parent: bool,

    #[serde(rename = "impotAttendu")]
    pub expected_tax: i64,
}

impl ScenarioRecord {
    /// Household described by this row.
    ///
    /// An empty situation cell yields a household without situation, which
    /// the engine then rejects.
    pub fn household(&self) -> Result<Household, ScenarioLoaderError> {
        let situation = match self.situation.trim() {
            "" => None,
            code => Some(FamilySituation::parse(code).ok_or_else(|| {
                ScenarioLoaderError::InvalidSituation {
                    value: self.situation.clone(),
                    row: self.row,
                }
            })?),
        };

        Ok(Household {
            income_declarant1: self.income_declarant1,
            income_declarant2: self.income_declarant2,
            situation,
            children: self.children,
            disabled_children: self.disabled_children,
            isolated_parent: self.isolated_parent,
        })
    }
}

/// Loader for scenario CSV files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Parse scenario records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ScenarioRecord>, ScenarioLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, result) in csv_reader.deserialize().enumerate() {
            let mut record: ScenarioRecord = result?;
            record.row = index + 1;
            records.push(record);
        }

        Ok(records)
    }
}
