//! Contribution exceptionnelle sur les hauts revenus (CEHR).

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::calculations::progressive::schedule_tax;
use crate::models::{FamilySituation, IncomeTaxParameters};

/// CEHR on the whole reference income, rounded to the euro.
///
/// Unlike the income tax it is not split by parts; only the family
/// situation selects the schedule.
pub fn high_income_surtax(
    reference_income: Decimal,
    situation: FamilySituation,
    params: &IncomeTaxParameters,
) -> Decimal {
    round_half_up(schedule_tax(
        params.surtax_schedule(situation),
        reference_income,
    ))
}
