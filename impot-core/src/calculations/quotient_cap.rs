//! Plafonnement des effets du quotient familial.

use rust_decimal::Decimal;

use crate::models::FiscalParts;

/// Household tax once the quotient familial benefit is capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CappedTax {
    pub tax: Decimal,
    pub capped: bool,
}

/// Limits the reduction brought by parts beyond the declarant base to
/// `half_part_cap` per extra half-part.
///
/// `tax_declarants_only` and `tax_household` are the rounded results of the
/// progressive schedule at declarant parts and at household parts.
pub fn cap_family_quotient(
    tax_declarants_only: Decimal,
    tax_household: Decimal,
    parts: &FiscalParts,
    half_part_cap: Decimal,
) -> CappedTax {
    let cap = parts.extra_half_parts() * half_part_cap;
    let benefit = tax_declarants_only - tax_household;

    if benefit > cap {
        CappedTax {
            tax: tax_declarants_only - cap,
            capped: true,
        }
    } else {
        CappedTax {
            tax: tax_household,
            capped: false,
        }
    }
}
