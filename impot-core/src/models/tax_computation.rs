use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::{FamilySituation, FiscalParts};

/// Everything the engine computed for one household.
///
/// Amounts are whole euros; parts may carry a half (e.g. `4.5`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputation {
    pub income_declarant1: Decimal,
    pub income_declarant2: Decimal,
    pub situation: FamilySituation,

    /// Sum of the per-declarant 10 % rebates.
    pub rebate: Decimal,

    /// Declared incomes minus rebate, floored at zero.
    pub reference_income: Decimal,

    pub parts: FiscalParts,

    /// Progressive tax computed with the declarant parts only.
    pub tax_declarants_only: Decimal,

    /// Progressive tax computed with all household parts, before capping.
    pub tax_household_uncapped: Decimal,

    /// Whether the quotient familial benefit hit its cap.
    pub family_quotient_capped: bool,

    pub tax_before_decote: Decimal,
    pub decote: Decimal,

    /// Contribution exceptionnelle sur les hauts revenus.
    pub surtax: Decimal,

    pub net_tax: Decimal,
}

impl TaxComputation {
    pub fn declarant_parts(&self) -> Decimal {
        self.parts.declarants()
    }

    pub fn household_parts(&self) -> Decimal {
        self.parts.household
    }

    pub fn tax_after_decote(&self) -> Decimal {
        self.tax_before_decote - self.decote
    }

    /// Net tax as an integer amount of euros.
    pub fn net_tax_euros(&self) -> i64 {
        self.net_tax.to_i64().unwrap_or(i64::MAX)
    }
}
