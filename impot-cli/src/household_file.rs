//! Household descriptions stored as TOML.
//!
//! ```toml
//! income_declarant1 = 55000
//! income_declarant2 = 45000   # optional, default 0
//! situation = "MARIE"         # CELIBATAIRE, PACSE, MARIE, DIVORCE or VEUF
//! children = 3                # optional, default 0
//! disabled_children = 1       # optional, default 0
//! isolated_parent = false     # optional, default false
//! ```
//!
//! A missing `situation` is accepted here and rejected by the engine.

use std::fs;
use std::path::{Path, PathBuf};

use impot_core::Household;
use thiserror::Error;

/// Errors that can occur while reading a household file.
#[derive(Debug, Error)]
pub enum HouseholdFileError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid household file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parses a household from TOML text.
pub fn parse_household(text: &str) -> Result<Household, toml::de::Error> {
    toml::from_str(text)
}

/// Reads and parses the household file at `path`.
pub fn load_household(path: &Path) -> Result<Household, HouseholdFileError> {
    let text = fs::read_to_string(path).map_err(|source| HouseholdFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_household(&text).map_err(|source| HouseholdFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
