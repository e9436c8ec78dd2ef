//! Common utility functions for tax calculations.
//!
//! Every intermediate amount of the income tax is expressed in whole euros,
//! so rounding here is to zero decimal places.

use rust_decimal::Decimal;

/// Rounds a decimal value to the nearest whole euro using half-up rounding.
///
/// Values exactly halfway between two integers are rounded away from zero,
/// which is half-up on the non-negative amounts the engine handles. Banker's
/// rounding (the `Decimal::round` default) would give different results on
/// ties such as `0.5`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use impot_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(737.66)), dec!(738));
/// assert_eq!(round_half_up(dec!(2.5)), dec!(3));
/// assert_eq!(round_half_up(dec!(539.055)), dec!(539));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Restricts `value` to `[floor, ceiling]`.
pub fn clamp(
    value: Decimal,
    floor: Decimal,
    ceiling: Decimal,
) -> Decimal {
    max(floor, min(ceiling, value))
}
