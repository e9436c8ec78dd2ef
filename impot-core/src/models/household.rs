use serde::{Deserialize, Serialize};

use super::FamilySituation;

/// Household description as declared by the taxpayer.
///
/// Counts and incomes are signed; negative values are reported by
/// [`validate_household`](crate::calculations::validate_household).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    /// Net taxable income of the first declarant, in whole euros.
    pub income_declarant1: i64,

    /// Net taxable income of the second declarant, in whole euros.
    /// Only jointly-taxed couples may declare a non-zero amount.
    #[serde(default)]
    pub income_declarant2: i64,

    /// `None` is rejected by validation.
    pub situation: Option<FamilySituation>,

    /// Dependent children, disabled ones included.
    #[serde(default)]
    pub children: i32,

    /// Dependent children with a disability card; never more than `children`.
    #[serde(default)]
    pub disabled_children: i32,

    /// "Parent isolé" (case T): raising children alone.
    #[serde(default)]
    pub isolated_parent: bool,
}

impl Household {
    /// Single declarant without children.
    pub fn single(
        situation: FamilySituation,
        income: i64,
    ) -> Self {
        Self {
            income_declarant1: income,
            income_declarant2: 0,
            situation: Some(situation),
            children: 0,
            disabled_children: 0,
            isolated_parent: false,
        }
    }

    pub fn with_children(
        mut self,
        children: i32,
        disabled_children: i32,
    ) -> Self {
        self.children = children;
        self.disabled_children = disabled_children;
        self
    }

    pub fn with_second_income(
        mut self,
        income: i64,
    ) -> Self {
        self.income_declarant2 = income;
        self
    }

    pub fn isolated(mut self) -> Self {
        self.isolated_parent = true;
        self
    }
}
