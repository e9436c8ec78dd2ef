//! Integration tests that read household files from disk and run them
//! through the engine and the text report.

use std::path::{Path, PathBuf};

use impot_cli::household_file::{HouseholdFileError, load_household};
use impot_cli::report::render;
use impot_core::{FamilySituation, HouseholdError, compute_tax};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn net_tax_of(name: &str) -> i64 {
    let household = load_household(&fixture_path(name)).expect("fixture should load");
    compute_tax(&household)
        .expect("fixture household should be valid")
        .net_tax_euros()
}

#[test]
fn test_married_four_children_hits_quotient_cap() {
    let household = load_household(&fixture_path("married_four_children.toml")).unwrap();
    assert_eq!(household.situation, Some(FamilySituation::Married));
    assert_eq!(household.income_declarant2, 0);

    let computation = compute_tax(&household).unwrap();

    assert_eq!(computation.household_parts(), dec!(5));
    assert!(computation.family_quotient_capped);
    assert_eq!(computation.net_tax, dec!(8270));
}

#[test]
fn test_isolated_parent_with_disabled_child() {
    assert_eq!(net_tax_of("isolated_parent.toml"), 184);
}

#[test]
fn test_dual_income_couple() {
    assert_eq!(net_tax_of("dual_income_couple.toml"), 4777);
}

#[test]
fn test_missing_situation_is_rejected_by_engine() {
    let household = load_household(&fixture_path("missing_situation.toml"))
        .expect("a missing situation is still a readable file");

    assert_eq!(compute_tax(&household).unwrap_err(), HouseholdError::MissingSituation);
}

#[test]
fn test_single_with_second_income_is_rejected() {
    let household = load_household(&fixture_path("single_with_second_income.toml")).unwrap();

    assert!(matches!(
        compute_tax(&household),
        Err(HouseholdError::InconsistentSecondIncome { .. })
    ));
}

#[test]
fn test_missing_file_reports_path() {
    let error = load_household(&fixture_path("nope.toml")).unwrap_err();

    assert!(matches!(error, HouseholdFileError::Io { .. }));
    assert!(error.to_string().contains("nope.toml"));
}

#[test]
fn test_report_for_fixture_ends_with_net_tax() {
    let household = load_household(&fixture_path("dual_income_couple.toml")).unwrap();
    let text = render(&compute_tax(&household).unwrap());

    let last = text.lines().last().unwrap();
    assert!(last.starts_with("Net tax"));
    assert!(last.ends_with("4777"));
}
