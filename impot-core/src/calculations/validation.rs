//! Household input checks run before any calculation.

use thiserror::Error;
use tracing::warn;

use crate::models::{FamilySituation, Household, IncomeTaxParameters};

/// Reasons a household description is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HouseholdError {
    /// A declared net income is negative.
    #[error("net income of declarant {declarant} is negative: {income}")]
    InvalidIncome { declarant: u8, income: i64 },

    /// Negative counts, or more disabled children than children.
    #[error("invalid children count: {children} children, {disabled_children} disabled")]
    InvalidChildren {
        children: i32,
        disabled_children: i32,
    },

    #[error("{children} dependent children is above the supported maximum of {max}")]
    UnsupportedChildrenCount { children: i32, max: i32 },

    #[error("family situation is missing")]
    MissingSituation,

    #[error("an isolated parent cannot be {0}")]
    InconsistentIsolation(FamilySituation),

    #[error("a {situation} declarant cannot declare a second income ({income})")]
    InconsistentSecondIncome {
        situation: FamilySituation,
        income: i64,
    },
}

/// Checks `household` and returns its family situation.
///
/// Checks run in a fixed order and the first failure is reported: incomes,
/// children counts, children maximum, missing situation, isolated parent in a
/// couple, second income outside a couple.
///
/// # Errors
///
/// Returns the first [`HouseholdError`] that applies.
pub fn validate_household(
    household: &Household,
    params: &IncomeTaxParameters,
) -> Result<FamilySituation, HouseholdError> {
    check(household, params).inspect_err(|error| {
        warn!(%error, ?household, "household rejected");
    })
}

fn check(
    household: &Household,
    params: &IncomeTaxParameters,
) -> Result<FamilySituation, HouseholdError> {
    for (declarant, income) in [
        (1, household.income_declarant1),
        (2, household.income_declarant2),
    ] {
        if income < 0 {
            return Err(HouseholdError::InvalidIncome { declarant, income });
        }
    }

    if household.children < 0
        || household.disabled_children < 0
        || household.disabled_children > household.children
    {
        return Err(HouseholdError::InvalidChildren {
            children: household.children,
            disabled_children: household.disabled_children,
        });
    }

    if household.children > params.max_children {
        return Err(HouseholdError::UnsupportedChildrenCount {
            children: household.children,
            max: params.max_children,
        });
    }

    let situation = household
        .situation
        .ok_or(HouseholdError::MissingSituation)?;

    if household.isolated_parent && situation.is_couple_taxed_jointly() {
        return Err(HouseholdError::InconsistentIsolation(situation));
    }

    if !situation.is_couple_taxed_jointly() && household.income_declarant2 > 0 {
        return Err(HouseholdError::InconsistentSecondIncome {
            situation,
            income: household.income_declarant2,
        });
    }

    Ok(situation)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn validate(household: &Household) -> Result<FamilySituation, HouseholdError> {
        validate_household(household, &IncomeTaxParameters::default())
    }

    #[test]
    fn accepts_simple_single_household() {
        let household = Household::single(FamilySituation::Single, 24000);

        assert_eq!(validate(&household), Ok(FamilySituation::Single));
    }

    #[test]
    fn accepts_couple_with_two_incomes_and_children() {
        let household = Household::single(FamilySituation::Married, 30000)
            .with_second_income(25000)
            .with_children(7, 7);

        assert_eq!(validate(&household), Ok(FamilySituation::Married));
    }

    #[test]
    fn rejects_negative_first_income() {
        let household = Household::single(FamilySituation::Married, -100);

        assert_eq!(
            validate(&household),
            Err(HouseholdError::InvalidIncome {
                declarant: 1,
                income: -100,
            })
        );
    }

    #[test]
    fn rejects_negative_second_income() {
        let household = Household::single(FamilySituation::Married, 0).with_second_income(-100);

        assert_eq!(
            validate(&household),
            Err(HouseholdError::InvalidIncome {
                declarant: 2,
                income: -100,
            })
        );
    }

    #[test]
    fn rejects_negative_children() {
        let household = Household::single(FamilySituation::Single, 20000).with_children(-1, 0);

        assert!(matches!(
            validate(&household),
            Err(HouseholdError::InvalidChildren { .. })
        ));
    }

    #[test]
    fn rejects_negative_disabled_children() {
        let household = Household::single(FamilySituation::Single, 20000).with_children(0, -2);

        assert!(matches!(
            validate(&household),
            Err(HouseholdError::InvalidChildren { .. })
        ));
    }

    #[test]
    fn rejects_more_disabled_children_than_children() {
        let household = Household::single(FamilySituation::Single, 200000).with_children(3, 4);

        assert_eq!(
            validate(&household),
            Err(HouseholdError::InvalidChildren {
                children: 3,
                disabled_children: 4,
            })
        );
    }

    #[test]
    fn rejects_more_than_seven_children() {
        let household = Household::single(FamilySituation::Married, 0).with_children(8, 0);

        assert_eq!(
            validate(&household),
            Err(HouseholdError::UnsupportedChildrenCount {
                children: 8,
                max: 7,
            })
        );
    }

    #[test]
    fn rejects_missing_situation() {
        let mut household = Household::single(FamilySituation::Single, 20000);
        household.situation = None;

        assert_eq!(validate(&household), Err(HouseholdError::MissingSituation));
    }

    #[test]
    fn rejects_isolated_parent_in_a_couple() {
        for situation in [FamilySituation::Married, FamilySituation::RegisteredPartnership] {
            let household = Household::single(situation, 200000)
                .with_children(3, 2)
                .isolated();

            assert_eq!(
                validate(&household),
                Err(HouseholdError::InconsistentIsolation(situation))
            );
        }
    }

    #[test]
    fn rejects_second_income_outside_a_couple() {
        for situation in [
            FamilySituation::Single,
            FamilySituation::Divorced,
            FamilySituation::Widowed,
        ] {
            let household = Household::single(situation, 0).with_second_income(100);

            assert_eq!(
                validate(&household),
                Err(HouseholdError::InconsistentSecondIncome {
                    situation,
                    income: 100,
                })
            );
        }
    }

    #[test]
    fn first_failing_check_wins() {
        // Negative income and too many children: income is checked first.
        let household = Household::single(FamilySituation::Single, -1)
            .with_children(8, 0)
            .with_second_income(10000);

        assert!(matches!(
            validate(&household),
            Err(HouseholdError::InvalidIncome { declarant: 1, .. })
        ));
    }

    #[test]
    fn children_maximum_is_checked_before_situation_consistency() {
        let household = Household::single(FamilySituation::Single, 200000)
            .with_second_income(10000)
            .with_children(8, 0);

        assert!(matches!(
            validate(&household),
            Err(HouseholdError::UnsupportedChildrenCount { .. })
        ));
    }
}
