//! Static reference tables consumed by the allocation engine.
//!
//! [`ReferenceData`] bundles the bracket schedule, payroll parameters,
//! jurisdiction profiles, category weights and drill-down tables. The
//! built-in copy is created once per process and shared read-only; callers
//! that load tables from elsewhere build their own through
//! [`ReferenceData::new`], which validates the invariants the engine relies
//! on.

pub mod embedded;

use std::collections::HashSet;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::models::{
    Bucket, CategoryWeight, CountyProfile, JurisdictionProfile, PayrollTaxConfig, ProgramDetail,
    TaxBracket,
};

static EMBEDDED: LazyLock<ReferenceData> =
    LazyLock::new(|| ReferenceData::from_tables(ReferenceTables::embedded()));

/// Problems found while validating reference tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceDataError {
    #[error("bracket schedule is empty")]
    NoTaxBrackets,

    #[error("bracket {index} does not start where the previous bracket ends")]
    BracketGap { index: usize },

    #[error("only the last bracket may be unbounded (bracket {index} has no upper bound)")]
    UnboundedBracketNotLast { index: usize },

    #[error("the last bracket must be unbounded")]
    MissingTopBracket,

    #[error("{context} must be between 0 and 1, got {value}")]
    InvalidRate { context: String, value: Decimal },

    #[error("{0} category weights are empty")]
    NoCategoryWeights(Bucket),

    #[error("{bucket} category shares must sum to 1, got {sum}")]
    SharesDoNotSumToOne { bucket: Bucket, sum: Decimal },

    #[error("jurisdiction table is empty")]
    NoJurisdictions,

    #[error("jurisdiction '{0}' appears more than once")]
    DuplicateJurisdiction(String),

    #[error("default jurisdiction '{0}' is not in the jurisdiction table")]
    MissingDefaultJurisdiction(String),

    #[error("subprogram percentages for '{category}' must sum to 100, got {sum}")]
    SubprogramsDoNotSumToHundred { category: String, sum: u32 },
}

/// Unvalidated tables, as loaded or as embedded.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    pub brackets: Vec<TaxBracket>,
    pub payroll: PayrollTaxConfig,
    pub jurisdictions: Vec<JurisdictionProfile>,
    pub default_jurisdiction: String,
    pub federal_weights: Vec<CategoryWeight>,
    pub state_local_weights: Vec<CategoryWeight>,
    pub counties: Vec<(String, Vec<CountyProfile>)>,
    pub program_details: Vec<ProgramDetail>,
}

impl ReferenceTables {
    /// The built-in tables.
    pub fn embedded() -> Self {
        Self {
            brackets: embedded::federal_brackets(),
            payroll: embedded::payroll_config(),
            jurisdictions: embedded::jurisdictions(),
            default_jurisdiction: embedded::DEFAULT_JURISDICTION.to_string(),
            federal_weights: embedded::federal_weights(),
            state_local_weights: embedded::state_local_weights(),
            counties: embedded::counties(),
            program_details: embedded::program_details(),
        }
    }

    /// Checks every invariant the engine depends on.
    ///
    /// # Errors
    ///
    /// Returns the first [`ReferenceDataError`] found, checking brackets,
    /// payroll, jurisdictions, weights and drill-down tables in that order.
    pub fn validate(&self) -> Result<(), ReferenceDataError> {
        validate_brackets(&self.brackets)?;
        validate_payroll(&self.payroll)?;
        self.validate_jurisdictions()?;
        validate_weights(Bucket::Federal, &self.federal_weights)?;
        validate_weights(Bucket::StateLocal, &self.state_local_weights)?;
        self.validate_local_tables()
    }

    fn validate_jurisdictions(&self) -> Result<(), ReferenceDataError> {
        if self.jurisdictions.is_empty() {
            return Err(ReferenceDataError::NoJurisdictions);
        }

        let mut seen = HashSet::new();
        for profile in &self.jurisdictions {
            if !seen.insert(profile.code.as_str()) {
                return Err(ReferenceDataError::DuplicateJurisdiction(
                    profile.code.clone(),
                ));
            }
            for (name, rate) in profile.rates() {
                check_rate(&format!("{} {}", profile.code, name), rate)?;
            }
        }

        if !seen.contains(self.default_jurisdiction.as_str()) {
            return Err(ReferenceDataError::MissingDefaultJurisdiction(
                self.default_jurisdiction.clone(),
            ));
        }
        Ok(())
    }

    fn validate_local_tables(&self) -> Result<(), ReferenceDataError> {
        for (code, counties) in &self.counties {
            for county in counties {
                check_rate(
                    &format!("{code} {} property_tax_rate", county.name),
                    county.property_tax_rate,
                )?;
                check_rate(
                    &format!("{code} {} local_sales_tax_rate", county.name),
                    county.local_sales_tax_rate,
                )?;
            }
        }

        for detail in &self.program_details {
            let sum: u32 = detail.subprograms.iter().map(|s| s.percentage).sum();
            if sum != 100 {
                return Err(ReferenceDataError::SubprogramsDoNotSumToHundred {
                    category: detail.category_name.clone(),
                    sum,
                });
            }
        }
        Ok(())
    }
}

fn check_rate(
    context: &str,
    value: Decimal,
) -> Result<(), ReferenceDataError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ReferenceDataError::InvalidRate {
            context: context.to_string(),
            value,
        });
    }
    Ok(())
}

fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), ReferenceDataError> {
    let Some(last) = brackets.last() else {
        return Err(ReferenceDataError::NoTaxBrackets);
    };
    if last.max_income.is_some() {
        return Err(ReferenceDataError::MissingTopBracket);
    }

    let mut previous_max: Option<Decimal> = None;
    for (index, bracket) in brackets.iter().enumerate() {
        check_rate(&format!("bracket {index} tax_rate"), bracket.tax_rate)?;

        if let Some(previous_max) = previous_max {
            if bracket.min_income != previous_max {
                return Err(ReferenceDataError::BracketGap { index });
            }
        }

        match bracket.max_income {
            Some(max) if max > bracket.min_income => previous_max = Some(max),
            Some(_) => return Err(ReferenceDataError::BracketGap { index }),
            None if index + 1 < brackets.len() => {
                return Err(ReferenceDataError::UnboundedBracketNotLast { index });
            }
            None => {}
        }
    }
    Ok(())
}

fn validate_payroll(payroll: &PayrollTaxConfig) -> Result<(), ReferenceDataError> {
    check_rate("ss_tax_rate", payroll.ss_tax_rate)?;
    check_rate("medicare_tax_rate", payroll.medicare_tax_rate)?;
    check_rate("additional_medicare_rate", payroll.additional_medicare_rate)
}

fn validate_weights(
    bucket: Bucket,
    weights: &[CategoryWeight],
) -> Result<(), ReferenceDataError> {
    if weights.is_empty() {
        return Err(ReferenceDataError::NoCategoryWeights(bucket));
    }
    for weight in weights {
        check_rate(
            &format!("{} share of {}", weight.category_name, bucket.as_str()),
            weight.share_of_bucket,
        )?;
    }

    let sum: Decimal = weights.iter().map(|w| w.share_of_bucket).sum();
    if sum != Decimal::ONE {
        return Err(ReferenceDataError::SharesDoNotSumToOne { bucket, sum });
    }
    Ok(())
}

/// Validated, immutable reference tables.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    brackets: Vec<TaxBracket>,
    payroll: PayrollTaxConfig,
    jurisdictions: Vec<JurisdictionProfile>,
    default_index: usize,
    federal_weights: Vec<CategoryWeight>,
    state_local_weights: Vec<CategoryWeight>,
    counties: Vec<(String, Vec<CountyProfile>)>,
    program_details: Vec<ProgramDetail>,
}

impl ReferenceData {
    /// Validates `tables` and wraps them for use by the engine.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError`] if any table breaks an invariant (see
    /// [`ReferenceTables::validate`]).
    pub fn new(tables: ReferenceTables) -> Result<Self, ReferenceDataError> {
        tables.validate()?;
        Ok(Self::from_tables(tables))
    }

    /// The process-wide built-in tables.
    pub fn embedded() -> &'static ReferenceData {
        &EMBEDDED
    }

    fn from_tables(tables: ReferenceTables) -> Self {
        let default_index = tables
            .jurisdictions
            .iter()
            .position(|j| j.code == tables.default_jurisdiction)
            .unwrap_or_default();

        Self {
            brackets: tables.brackets,
            payroll: tables.payroll,
            jurisdictions: tables.jurisdictions,
            default_index,
            federal_weights: tables.federal_weights,
            state_local_weights: tables.state_local_weights,
            counties: tables.counties,
            program_details: tables.program_details,
        }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn payroll(&self) -> &PayrollTaxConfig {
        &self.payroll
    }

    /// All profiles in selector order.
    pub fn jurisdictions(&self) -> &[JurisdictionProfile] {
        &self.jurisdictions
    }

    /// Strict lookup by code.
    pub fn jurisdiction(
        &self,
        code: &str,
    ) -> Option<&JurisdictionProfile> {
        self.jurisdictions.iter().find(|j| j.code == code)
    }

    pub fn default_jurisdiction(&self) -> &JurisdictionProfile {
        &self.jurisdictions[self.default_index]
    }

    /// Looks up `code`, falling back to the default profile for unknown
    /// codes. Never fails.
    pub fn resolve(
        &self,
        code: &str,
    ) -> &JurisdictionProfile {
        match self.jurisdiction(code) {
            Some(profile) => profile,
            None => {
                let fallback = self.default_jurisdiction();
                debug!(
                    requested = code,
                    fallback = %fallback.code,
                    "unknown jurisdiction code; using default profile"
                );
                fallback
            }
        }
    }

    pub fn weights(
        &self,
        bucket: Bucket,
    ) -> &[CategoryWeight] {
        match bucket {
            Bucket::Federal => &self.federal_weights,
            Bucket::StateLocal => &self.state_local_weights,
        }
    }

    /// Counties with local data for `code`; empty when none are known.
    pub fn counties(
        &self,
        code: &str,
    ) -> &[CountyProfile] {
        self.counties
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, counties)| counties.as_slice())
            .unwrap_or(&[])
    }

    pub fn county(
        &self,
        code: &str,
        name: &str,
    ) -> Option<&CountyProfile> {
        self.counties(code).iter().find(|c| c.name == name)
    }

    pub fn program_detail(
        &self,
        category_name: &str,
    ) -> Option<&ProgramDetail> {
        self.program_details
            .iter()
            .find(|d| d.category_name == category_name)
    }
}
