//! Loads the sample configuration in `test-data/` and runs the engine with
//! the reference tables it points at.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tax_cli::config::AppConfig;
use tax_cli::render::{AllocationView, CalculationReport};
use tax_core::{AllocationEngine, AllocationError, HouseholdInputs};

fn sample_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join("config.toml")
}

#[test]
fn test_sample_config_loads_reference_files() {
    let config = AppConfig::load(&sample_config_path()).expect("sample config is valid");

    assert_eq!(config.log_level, "tax_core=debug,info");
    let jurisdictions = config
        .reference
        .jurisdictions
        .as_ref()
        .expect("jurisdictions path is set");
    assert!(jurisdictions.is_absolute());
    assert!(jurisdictions.exists(), "{} should exist", jurisdictions.display());

    let data = config.reference_loader().load().expect("fixtures are valid");
    assert_eq!(data.default_jurisdiction().code, "NY");
    assert_eq!(data.jurisdictions().len(), 51);
}

#[test]
fn test_configured_default_applies_to_unknown_codes() {
    let config = AppConfig::load(&sample_config_path()).expect("sample config is valid");
    let data = config.reference_loader().load().expect("fixtures are valid");
    let engine = AllocationEngine::new(&data);
    let inputs = HouseholdInputs::new(dec!(75000), dec!(400000), dec!(40000));

    let unknown = engine.calculate(&inputs, "ZZ").expect("inputs are valid");
    let new_york = engine.calculate(&inputs, "NY").expect("inputs are valid");

    assert_eq!(unknown.state_local_bucket_total, new_york.state_local_bucket_total);
    assert_eq!(unknown.federal_allocations, new_york.federal_allocations);
}

#[test]
fn test_negative_amount_reaches_engine_policy() {
    let income = tax_cli::input::parse_amount("-5,000").expect("well-formed amount");
    let inputs = HouseholdInputs::new(income, dec!(0), dec!(0));

    let err = AllocationEngine::embedded()
        .calculate(&inputs, "CA")
        .expect_err("negative income is rejected");

    assert_eq!(
        err,
        AllocationError::NegativeInput {
            field: "annual_income",
            value: dec!(-5000),
        }
    );
}

#[test]
fn test_text_and_json_views_agree() {
    let engine = AllocationEngine::embedded();
    let result = engine
        .calculate(
            &HouseholdInputs::new(dec!(75000), dec!(400000), dec!(40000)),
            "CA",
        )
        .expect("inputs are valid");
    let profile = engine.reference().resolve("CA");

    let text = AllocationView {
        result: &result,
        jurisdiction: profile,
    }
    .to_string();
    let json = CalculationReport {
        jurisdiction_name: &profile.display_name,
        allocation: &result,
        local: None,
        program: None,
    }
    .to_json()
    .expect("serializable");

    assert!(text.contains("Total estimated tax: $31,020"));
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    let total: Decimal = value["allocation"]["total_tax"]
        .as_str()
        .expect("decimals serialize as strings")
        .parse()
        .expect("valid decimal");
    assert_eq!(total, dec!(31020));
}
