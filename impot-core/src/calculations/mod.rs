//! Income tax calculation stages and the worksheet that chains them.
//!
//! Each stage lives in its own module and is a plain function of its inputs;
//! [`IncomeTaxWorksheet`] runs them in statutory order.

pub mod common;
pub mod decote;
pub mod fiscal_parts;
pub mod progressive;
pub mod quotient_cap;
pub mod rebate;
pub mod surtax;
pub mod validation;
pub mod worksheets;

pub use validation::{HouseholdError, validate_household};
pub use worksheets::{IncomeTaxWorksheet, compute_tax};
