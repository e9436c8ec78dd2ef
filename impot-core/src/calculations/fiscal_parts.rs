//! Quotient familial: number of parts of a household.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{DeclarantBase, FamilySituation, FiscalParts};

/// Parts granted for dependent children: half a part for each of the first
/// two, a full part from the third on.
pub fn children_parts(children: i32) -> Decimal {
    let children = Decimal::from(children);
    if children <= Decimal::TWO {
        children * dec!(0.5)
    } else {
        Decimal::ONE + (children - Decimal::TWO)
    }
}

/// Computes declarant and household parts.
///
/// Supplements on top of the children parts are cumulative:
/// - isolated parent with at least one child: +0.5
/// - widowed with at least one child: +1
/// - each disabled child: +0.5
pub fn fiscal_parts(
    situation: FamilySituation,
    children: i32,
    disabled_children: i32,
    isolated_parent: bool,
) -> FiscalParts {
    let declarant_base = DeclarantBase::for_situation(situation);
    let has_children = children > 0;

    let mut household = declarant_base.parts() + children_parts(children);
    if isolated_parent && has_children {
        household += dec!(0.5);
    }
    if situation.is_widowed() && has_children {
        household += Decimal::ONE;
    }
    household += Decimal::from(disabled_children) * dec!(0.5);

    FiscalParts {
        declarant_base,
        household,
    }
}
