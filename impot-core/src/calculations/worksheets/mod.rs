//! Income tax worksheet implementations.

pub mod income_tax;

pub use income_tax::{IncomeTaxWorksheet, compute_tax};
