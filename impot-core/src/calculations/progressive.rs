//! Progressive schedule evaluation.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::TaxSchedule;

/// Applies `schedule` to `income` bracket by bracket, unrounded.
///
/// Brackets are visited in ascending order and the walk stops at the first
/// bracket whose lower bound is not exceeded.
pub fn schedule_tax(
    schedule: &TaxSchedule,
    income: Decimal,
) -> Decimal {
    let mut tax = Decimal::ZERO;

    for bracket in schedule.brackets() {
        if income <= bracket.min_income {
            break;
        }
        let upper = match bracket.max_income {
            Some(max) => income.min(max),
            None => income,
        };
        tax += (upper - bracket.min_income) * bracket.tax_rate;
    }

    tax
}

/// Tax on `reference_income` split over `parts`, scaled back and rounded to
/// the euro.
pub fn tax_for_parts(
    schedule: &TaxSchedule,
    reference_income: Decimal,
    parts: Decimal,
) -> Decimal {
    let per_part = schedule_tax(schedule, reference_income / parts);
    round_half_up(per_part * parts)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::IncomeTaxParameters;

    fn schedule() -> TaxSchedule {
        IncomeTaxParameters::impots_2024().schedule
    }

    #[test]
    fn schedule_tax_is_zero_in_first_bracket() {
        assert_eq!(schedule_tax(&schedule(), dec!(0)), dec!(0));
        assert_eq!(schedule_tax(&schedule(), dec!(11294)), dec!(0));
    }

    #[test]
    fn schedule_tax_second_bracket() {
        // (18000 - 11294) * 0.11
        assert_eq!(schedule_tax(&schedule(), dec!(18000)), dec!(737.66));
    }

    #[test]
    fn schedule_tax_third_bracket() {
        // 17503 * 0.11 + (31500 - 28797) * 0.30
        assert_eq!(schedule_tax(&schedule(), dec!(31500)), dec!(2736.23));
    }

    #[test]
    fn schedule_tax_top_bracket() {
        // 1925.33 + 16063.20 + 38853.65 + (185829 - 177106) * 0.45
        assert_eq!(schedule_tax(&schedule(), dec!(185829)), dec!(60767.53));
    }

    #[test]
    fn schedule_tax_at_bracket_boundary_uses_lower_rate_only() {
        assert_eq!(schedule_tax(&schedule(), dec!(28797)), dec!(1925.33));
    }

    #[test]
    fn tax_for_parts_single_part() {
        assert_eq!(tax_for_parts(&schedule(), dec!(18000), dec!(1)), dec!(738));
    }

    #[test]
    fn tax_for_parts_splits_income_across_parts() {
        // 53752.5 per part: 1925.33 + 7486.65 = 9411.98, times 2
        assert_eq!(tax_for_parts(&schedule(), dec!(107505), dec!(2)), dec!(18824));
        // 21501 per part: 1122.77, times 5
        assert_eq!(tax_for_parts(&schedule(), dec!(107505), dec!(5)), dec!(5614));
    }

    #[test]
    fn tax_for_parts_handles_half_parts() {
        // 9000 per part stays in the 0 % bracket
        assert_eq!(tax_for_parts(&schedule(), dec!(40500), dec!(4.5)), dec!(0));
    }

    #[test]
    fn surtax_schedules_only_tax_above_thresholds() {
        let params = IncomeTaxParameters::impots_2024();

        assert_eq!(schedule_tax(&params.surtax_single, dec!(250000)), dec!(0));
        assert_eq!(schedule_tax(&params.surtax_single, dec!(300000)), dec!(1500));
        assert_eq!(schedule_tax(&params.surtax_couple, dec!(500000)), dec!(0));
        assert_eq!(schedule_tax(&params.surtax_couple, dec!(1200000)), dec!(23000));
    }
}
