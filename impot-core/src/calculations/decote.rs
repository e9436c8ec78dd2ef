//! Décote: reduction of small tax amounts.

use rust_decimal::Decimal;

use crate::calculations::common::{min, round_half_up};
use crate::models::{DeclarantBase, IncomeTaxParameters};

/// Décote granted on `tax_before_decote`, rounded to the euro.
///
/// Below the band threshold the décote is `max_decote - tax * rate`, and it
/// never exceeds the tax itself.
pub fn decote(
    tax_before_decote: Decimal,
    base: DeclarantBase,
    params: &IncomeTaxParameters,
) -> Decimal {
    let band = params.decote_band(base);
    let raw = if tax_before_decote < band.threshold {
        band.max_decote - tax_before_decote * params.decote_rate
    } else {
        Decimal::ZERO
    };

    round_half_up(min(raw, tax_before_decote))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn single(tax: Decimal) -> Decimal {
        decote(tax, DeclarantBase::Single, &IncomeTaxParameters::default())
    }

    fn couple(tax: Decimal) -> Decimal {
        decote(tax, DeclarantBase::Couple, &IncomeTaxParameters::default())
    }

    #[test]
    fn single_decote_below_threshold() {
        // 873 - 738 * 0.4525 = 539.055
        assert_eq!(single(dec!(738)), dec!(539));
    }

    #[test]
    fn decote_never_exceeds_tax() {
        assert_eq!(single(dec!(400)), dec!(400));
        assert_eq!(couple(dec!(900)), dec!(900));
    }

    #[test]
    fn zero_tax_has_zero_decote() {
        assert_eq!(single(dec!(0)), dec!(0));
        assert_eq!(couple(dec!(0)), dec!(0));
    }

    #[test]
    fn single_decote_stops_at_threshold() {
        assert_eq!(single(dec!(1929)), dec!(0));
        // 873 - 1928 * 0.4525 = 0.58
        assert_eq!(single(dec!(1928)), dec!(1));
    }

    #[test]
    fn couple_decote_below_threshold() {
        // 1444 - 2000 * 0.4525 = 539
        assert_eq!(couple(dec!(2000)), dec!(539));
    }

    #[test]
    fn couple_decote_stops_at_threshold() {
        assert_eq!(couple(dec!(3191)), dec!(0));
        assert_eq!(couple(dec!(5000)), dec!(0));
    }

    #[test]
    fn couple_threshold_is_higher_than_single_one() {
        assert_eq!(single(dec!(2500)), dec!(0));
        // 1444 - 2500 * 0.4525 = 312.75
        assert_eq!(couple(dec!(2500)), dec!(313));
    }
}
