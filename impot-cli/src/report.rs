//! Plain-text rendering of a [`TaxComputation`].

use std::fmt::Write;

use impot_core::{IncomeTaxParameters, TaxComputation};
use rust_decimal::Decimal;

const LABEL_WIDTH: usize = 34;

fn line(
    out: &mut String,
    label: &str,
    value: impl std::fmt::Display,
) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$}{value:>12}");
}

/// Parts without trailing zeros: `5`, `4.5`.
fn parts(value: Decimal) -> Decimal {
    value.normalize()
}

/// Renders every value of the computation, one per line, in worksheet order.
pub fn render(computation: &TaxComputation) -> String {
    let mut out = String::new();

    line(&mut out, "Family situation", computation.situation);
    line(&mut out, "Net income, declarant 1", computation.income_declarant1);
    line(&mut out, "Net income, declarant 2", computation.income_declarant2);
    line(&mut out, "Rebate (abattement)", computation.rebate);
    line(&mut out, "Reference income", computation.reference_income);
    line(&mut out, "Declarant parts", parts(computation.declarant_parts()));
    line(&mut out, "Household parts", parts(computation.household_parts()));
    line(&mut out, "Tax at declarant parts", computation.tax_declarants_only);
    line(&mut out, "Tax at household parts", computation.tax_household_uncapped);
    line(
        &mut out,
        "Quotient familial capped",
        if computation.family_quotient_capped { "yes" } else { "no" },
    );
    line(&mut out, "Tax before decote", computation.tax_before_decote);
    line(&mut out, "Decote", computation.decote);
    line(&mut out, "CEHR surtax", computation.surtax);
    line(&mut out, "Net tax", computation.net_tax);

    out
}

/// Renders the statutory parameters as TOML.
pub fn render_parameters(params: &IncomeTaxParameters) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(params)
}
