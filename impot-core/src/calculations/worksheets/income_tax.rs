//! Income tax worksheet for a French household (2024 return, 2023 income).
//!
//! # Worksheet Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Validate the household |
//! | 2    | Rebate: 10 % per declarant, within floor and ceiling |
//! | 3    | Reference income (incomes - rebate, minimum 0) |
//! | 4    | Fiscal parts (declarants only, and whole household) |
//! | 5    | CEHR on the reference income |
//! | 6    | Progressive tax at declarant parts |
//! | 7    | Progressive tax at household parts |
//! | 8    | Quotient familial cap: at least step 6 minus 1759 per extra half-part |
//! | 9    | Décote |
//! | 10   | Net tax: step 8 - step 9 + step 5 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use impot_core::{FamilySituation, Household, IncomeTaxParameters, IncomeTaxWorksheet};
//!
//! let params = IncomeTaxParameters::impots_2024();
//! let household = Household::single(FamilySituation::Married, 120000).with_children(4, 0);
//!
//! let result = IncomeTaxWorksheet::new(&params).calculate(&household).unwrap();
//!
//! assert_eq!(result.household_parts(), dec!(5));
//! assert!(result.family_quotient_capped);
//! assert_eq!(result.net_tax, dec!(8270));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::calculations::decote::decote;
use crate::calculations::fiscal_parts::fiscal_parts;
use crate::calculations::progressive::tax_for_parts;
use crate::calculations::quotient_cap::cap_family_quotient;
use crate::calculations::rebate::{household_rebate, reference_income};
use crate::calculations::surtax::high_income_surtax;
use crate::calculations::validation::{HouseholdError, validate_household};
use crate::models::{Household, IncomeTaxParameters, TaxComputation};

/// Calculator for the household income tax.
///
/// Holds only a borrow of the statutory parameters; every call to
/// [`calculate`](Self::calculate) returns a new [`TaxComputation`].
#[derive(Debug, Clone, Copy)]
pub struct IncomeTaxWorksheet<'a> {
    params: &'a IncomeTaxParameters,
}

impl<'a> IncomeTaxWorksheet<'a> {
    pub fn new(params: &'a IncomeTaxParameters) -> Self {
        Self { params }
    }

    /// Runs the whole worksheet for `household`.
    ///
    /// # Errors
    ///
    /// Returns [`HouseholdError`] when the household fails validation. Nothing
    /// is computed in that case.
    pub fn calculate(
        &self,
        household: &Household,
    ) -> Result<TaxComputation, HouseholdError> {
        let situation = validate_household(household, self.params)?;

        let income_declarant1 = Decimal::from(household.income_declarant1);
        let income_declarant2 = Decimal::from(household.income_declarant2);

        let rebate = household_rebate(
            income_declarant1,
            income_declarant2,
            situation,
            &self.params.rebate,
        );
        let reference_income = reference_income(income_declarant1, income_declarant2, rebate);

        let parts = fiscal_parts(
            situation,
            household.children,
            household.disabled_children,
            household.isolated_parent,
        );
        debug!(
            %rebate,
            %reference_income,
            declarant_parts = %parts.declarants(),
            household_parts = %parts.household,
            "base computed"
        );

        let surtax = high_income_surtax(reference_income, situation, self.params);

        let tax_declarants_only =
            tax_for_parts(&self.params.schedule, reference_income, parts.declarants());
        let tax_household_uncapped =
            tax_for_parts(&self.params.schedule, reference_income, parts.household);

        let capped = cap_family_quotient(
            tax_declarants_only,
            tax_household_uncapped,
            &parts,
            self.params.half_part_cap,
        );
        let tax_before_decote = capped.tax;

        let decote = decote(tax_before_decote, parts.declarant_base, self.params);
        let net_tax = round_half_up(tax_before_decote - decote + surtax);

        debug!(
            %tax_declarants_only,
            %tax_household_uncapped,
            family_quotient_capped = capped.capped,
            %decote,
            %surtax,
            %net_tax,
            "income tax computed"
        );

        Ok(TaxComputation {
            income_declarant1,
            income_declarant2,
            situation,
            rebate,
            reference_income,
            parts,
            tax_declarants_only,
            tax_household_uncapped,
            family_quotient_capped: capped.capped,
            tax_before_decote,
            decote,
            surtax,
            net_tax,
        })
    }
}

/// Computes `household` with the 2024 parameters.
///
/// # Errors
///
/// See [`IncomeTaxWorksheet::calculate`].
pub fn compute_tax(household: &Household) -> Result<TaxComputation, HouseholdError> {
    IncomeTaxWorksheet::new(&IncomeTaxParameters::impots_2024()).calculate(household)
}
