//! 10 % rebate on declared net income.

use rust_decimal::Decimal;

use crate::calculations::common::{clamp, round_half_up};
use crate::models::{FamilySituation, RebateRule};

/// Rebate of one declarant: 10 % of the income, rounded, then kept within
/// the statutory floor and ceiling.
pub fn declarant_rebate(
    income: Decimal,
    rule: &RebateRule,
) -> Decimal {
    clamp(round_half_up(income * rule.rate), rule.floor, rule.ceiling)
}

/// Total rebate of the household.
///
/// The second declarant only exists for jointly-taxed couples. For them the
/// floor applies even when the second income is zero.
pub fn household_rebate(
    income_declarant1: Decimal,
    income_declarant2: Decimal,
    situation: FamilySituation,
    rule: &RebateRule,
) -> Decimal {
    let first = declarant_rebate(income_declarant1, rule);
    let second = if situation.is_couple_taxed_jointly() {
        declarant_rebate(income_declarant2, rule)
    } else {
        Decimal::ZERO
    };

    first + second
}

/// Income left after the rebate, never negative.
pub fn reference_income(
    income_declarant1: Decimal,
    income_declarant2: Decimal,
    rebate: Decimal,
) -> Decimal {
    (income_declarant1 + income_declarant2 - rebate).max(Decimal::ZERO)
}
