pub mod calculations;
pub mod models;

pub use calculations::{HouseholdError, IncomeTaxWorksheet, compute_tax};
pub use models::*;
