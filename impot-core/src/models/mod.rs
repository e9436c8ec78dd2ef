mod family_situation;
mod fiscal_parts;
mod household;
mod income_tax_parameters;
mod tax_bracket;
mod tax_computation;

pub use family_situation::FamilySituation;
pub use fiscal_parts::{DeclarantBase, FiscalParts};
pub use household::Household;
pub use income_tax_parameters::{DecoteBand, IncomeTaxParameters, RebateRule};
pub use tax_bracket::{ScheduleError, TaxBracket, TaxSchedule};
pub use tax_computation::TaxComputation;
