use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FamilySituation;

/// Number of parts the declarants bring on their own, before any child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarantBase {
    /// One declarant: 1 part.
    Single,
    /// Jointly-taxed couple: 2 parts.
    Couple,
}

impl DeclarantBase {
    pub fn for_situation(situation: FamilySituation) -> Self {
        if situation.is_couple_taxed_jointly() {
            Self::Couple
        } else {
            Self::Single
        }
    }

    pub fn parts(&self) -> Decimal {
        match self {
            Self::Single => Decimal::ONE,
            Self::Couple => Decimal::TWO,
        }
    }
}

/// Quotient familial of a household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalParts {
    pub declarant_base: DeclarantBase,
    /// Declarant parts plus children, disability, widowhood and isolation
    /// supplements.
    pub household: Decimal,
}

impl FiscalParts {
    pub fn declarants(&self) -> Decimal {
        self.declarant_base.parts()
    }

    /// Half-parts granted on top of the declarant base.
    pub fn extra_half_parts(&self) -> Decimal {
        (self.household - self.declarants()) * Decimal::TWO
    }
}
