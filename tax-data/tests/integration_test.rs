//! Integration tests for loading reference data from the CSV files in
//! `test-data/` and running the engine against it.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::{
    AllocationEngine, Bucket, HouseholdInputs, ReferenceData, ReferenceDataError, ReferenceTables,
};
use tax_data::{
    CategoryWeightLoader, JurisdictionLoader, ReferenceDataLoader, ReferenceLoaderError,
    TaxBracketLoader,
};

const JURISDICTIONS_CSV: &str = include_str!("../test-data/jurisdictions.csv");
const WEIGHTS_CSV: &str = include_str!("../test-data/category_weights.csv");
const BRACKETS_CSV: &str = include_str!("../test-data/brackets.csv");

fn test_data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}

fn full_loader() -> ReferenceDataLoader {
    ReferenceDataLoader::new()
        .jurisdictions(test_data("jurisdictions.csv"))
        .category_weights(test_data("category_weights.csv"))
        .brackets(test_data("brackets.csv"))
}

#[test]
fn test_fixture_files_match_embedded_tables() {
    let embedded = ReferenceTables::embedded();

    let jurisdictions =
        JurisdictionLoader::parse(JURISDICTIONS_CSV.as_bytes()).expect("Failed to parse CSV");
    let weights = CategoryWeightLoader::parse(WEIGHTS_CSV.as_bytes()).expect("Failed to parse CSV");
    let brackets = TaxBracketLoader::parse(BRACKETS_CSV.as_bytes()).expect("Failed to parse CSV");

    assert_eq!(jurisdictions, embedded.jurisdictions);
    assert_eq!(weights.federal, embedded.federal_weights);
    assert_eq!(weights.state_local, embedded.state_local_weights);
    assert_eq!(brackets, embedded.brackets);
}

#[test]
fn test_jurisdictions_keep_selector_order() {
    let data = full_loader().load().expect("fixtures are valid");

    let codes: Vec<&str> = data
        .jurisdictions()
        .iter()
        .take(10)
        .map(|j| j.code.as_str())
        .collect();

    assert_eq!(
        codes,
        vec!["AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL"]
    );
}

#[test]
fn test_loaded_data_reproduces_worked_example() {
    let data = full_loader().load().expect("fixtures are valid");
    let engine = AllocationEngine::new(&data);

    let result = engine
        .calculate(
            &HouseholdInputs::new(dec!(75000), dec!(400000), dec!(40000)),
            "CA",
        )
        .expect("inputs are non-negative");

    assert_eq!(result.federal_bucket_total, dec!(17545.00));
    assert_eq!(result.state_local_bucket_total, dec!(13475.00));
    assert_eq!(result.total_tax, dec!(31020.00));
    assert_eq!(result.federal_share_percent, 57);
    assert_eq!(result.state_local_share_percent, 43);
    assert_eq!(result.federal_allocations.len(), 16);
    assert_eq!(result.state_local_allocations.len(), 13);
}

#[test]
fn test_partial_files_fall_back_to_embedded_tables() {
    let data = ReferenceDataLoader::new()
        .jurisdictions(test_data("jurisdictions_small.csv"))
        .default_jurisdiction("TX")
        .load()
        .expect("small table with TX default is valid");

    assert_eq!(data.jurisdictions().len(), 2);
    assert_eq!(data.resolve("CA").code, "TX");
    assert_eq!(data.weights(Bucket::Federal).len(), 16);
    assert_eq!(data.brackets().len(), 7);
}

#[test]
fn test_small_table_without_default_is_rejected() {
    let err = ReferenceDataLoader::new()
        .jurisdictions(test_data("jurisdictions_small.csv"))
        .load()
        .expect_err("CA is not in the small table");

    match err {
        ReferenceLoaderError::Validation(ReferenceDataError::MissingDefaultJurisdiction(code)) => {
            assert_eq!(code, "CA");
        }
        other => panic!("expected MissingDefaultJurisdiction, got {other:?}"),
    }
}

#[test]
fn test_unbalanced_weights_are_rejected() {
    let err = ReferenceDataLoader::new()
        .category_weights(test_data("category_weights_unbalanced.csv"))
        .load()
        .expect_err("federal shares sum to 0.90");

    match err {
        ReferenceLoaderError::Validation(ReferenceDataError::SharesDoNotSumToOne {
            bucket,
            sum,
        }) => {
            assert_eq!(bucket, Bucket::Federal);
            assert_eq!(sum, dec!(0.90));
        }
        other => panic!("expected SharesDoNotSumToOne, got {other:?}"),
    }
}

#[test]
fn test_gapped_brackets_are_rejected() {
    let csv = "min_income,max_income,base_tax,rate\n0,10000,0,0.10\n12000,,1000,0.20";
    let mut tables = ReferenceTables::embedded();
    tables.brackets = TaxBracketLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

    let err = ReferenceData::new(tables).expect_err("gap between 10000 and 12000");

    assert_eq!(err, ReferenceDataError::BracketGap { index: 1 });
}
