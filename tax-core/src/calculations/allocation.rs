//! Allocation of a household's taxes across spending categories.
//!
//! The engine splits total tax into two buckets:
//!
//! | Bucket      | Made up of                                          |
//! |-------------|-----------------------------------------------------|
//! | Federal     | federal income tax + payroll tax                    |
//! | State/local | income × income rate + property × property rate + spending × sales rate |
//!
//! Each bucket is then fanned out over its category weights. Percentages are
//! rounded independently, so the two bucket shares may add up to 99 or 101
//! and category amounts are never adjusted to absorb rounding.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::AllocationEngine;
//! use tax_core::HouseholdInputs;
//!
//! let inputs = HouseholdInputs::new(dec!(75000), dec!(400000), dec!(40000));
//! let result = AllocationEngine::embedded().calculate(&inputs, "CA").unwrap();
//!
//! assert_eq!(result.federal_bucket_total, dec!(17545.00));
//! assert_eq!(result.state_local_bucket_total, dec!(13475.00));
//! assert_eq!(result.total_tax, dec!(31020.00));
//! assert_eq!(result.federal_share_percent, 57);
//! assert_eq!(result.state_local_share_percent, 43);
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::whole_percent;
use crate::calculations::federal::FederalIncomeTax;
use crate::calculations::payroll::PayrollTax;
use crate::models::{
    AllocationEntry, AllocationResult, Bucket, CategoryWeight, HouseholdInputs,
    JurisdictionProfile, TaxComponents,
};
use crate::reference::ReferenceData;

/// Errors that can occur during an allocation run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    /// Household amounts must be zero or positive.
    #[error("{field} must not be negative, got {value}")]
    NegativeInput { field: &'static str, value: Decimal },
}

/// Fans `bucket_total` out over `weights`, preserving their order.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::fan_out;
/// use tax_core::CategoryWeight;
///
/// let weights = vec![
///     CategoryWeight::new("Schools", dec!(0.6), "bg-blue-500"),
///     CategoryWeight::new("Roads", dec!(0.4), "bg-amber-500"),
/// ];
///
/// let entries = fan_out(dec!(1000), &weights);
///
/// assert_eq!(entries[0].amount, dec!(600));
/// assert_eq!(entries[1].percentage_of_bucket, 40);
/// ```
pub fn fan_out(
    bucket_total: Decimal,
    weights: &[CategoryWeight],
) -> Vec<AllocationEntry> {
    weights
        .iter()
        .map(|weight| AllocationEntry {
            category_name: weight.category_name.clone(),
            amount: bucket_total * weight.share_of_bucket,
            percentage_of_bucket: whole_percent(weight.share_of_bucket),
            display_color: weight.display_color.clone(),
        })
        .collect()
}

/// Stateless allocation calculator bound to a set of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct AllocationEngine<'a> {
    reference: &'a ReferenceData,
}

impl AllocationEngine<'static> {
    /// Engine over the built-in reference tables.
    pub fn embedded() -> Self {
        Self::new(ReferenceData::embedded())
    }
}

impl<'a> AllocationEngine<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &'a ReferenceData {
        self.reference
    }

    /// Runs the full allocation for `inputs` in `jurisdiction_code`.
    ///
    /// Unknown codes use the default jurisdiction. When the household owes
    /// no tax at all, the result has zero totals and no category entries.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::NegativeInput`] if any household amount is
    /// negative.
    pub fn calculate(
        &self,
        inputs: &HouseholdInputs,
        jurisdiction_code: &str,
    ) -> Result<AllocationResult, AllocationError> {
        self.validate(inputs)?;

        let profile = self.reference.resolve(jurisdiction_code);
        let components = self.components(inputs, profile);

        let federal_bucket_total = components.federal_total();
        let state_local_bucket_total = components.state_local_total();
        let total_tax = federal_bucket_total + state_local_bucket_total;

        if total_tax.is_zero() {
            debug!(jurisdiction = %profile.code, "no tax owed; returning empty allocation");
            return Ok(AllocationResult::empty(&profile.code));
        }

        let result = AllocationResult {
            jurisdiction_code: profile.code.clone(),
            total_tax,
            federal_bucket_total,
            state_local_bucket_total,
            federal_share_percent: whole_percent(federal_bucket_total / total_tax),
            state_local_share_percent: whole_percent(state_local_bucket_total / total_tax),
            federal_allocations: fan_out(
                federal_bucket_total,
                self.reference.weights(Bucket::Federal),
            ),
            state_local_allocations: fan_out(
                state_local_bucket_total,
                self.reference.weights(Bucket::StateLocal),
            ),
            components,
        };

        debug!(
            jurisdiction = %result.jurisdiction_code,
            total_tax = %result.total_tax,
            federal = %result.federal_bucket_total,
            state_local = %result.state_local_bucket_total,
            "allocation calculated"
        );
        Ok(result)
    }

    /// Computes the individual taxes behind both buckets.
    pub fn components(
        &self,
        inputs: &HouseholdInputs,
        profile: &JurisdictionProfile,
    ) -> TaxComponents {
        let income = inputs.annual_income;

        TaxComponents {
            federal_income_tax: FederalIncomeTax::new(self.reference.brackets()).calculate(income),
            payroll_tax: PayrollTax::new(self.reference.payroll())
                .calculate(income)
                .total,
            state_income_tax: income * profile.income_tax_rate,
            property_tax: inputs.property_value * profile.property_tax_rate,
            sales_tax: inputs.annual_spending * profile.sales_tax_rate,
        }
    }

    fn validate(
        &self,
        inputs: &HouseholdInputs,
    ) -> Result<(), AllocationError> {
        for (field, value) in inputs.fields() {
            if value < Decimal::ZERO {
                warn!(field, value = %value, "rejecting negative household input");
                return Err(AllocationError::NegativeInput { field, value });
            }
        }
        Ok(())
    }
}

/// Runs [`AllocationEngine::calculate`] against the built-in tables.
pub fn calculate_tax_allocations(
    inputs: &HouseholdInputs,
    jurisdiction_code: &str,
) -> Result<AllocationResult, AllocationError> {
    AllocationEngine::embedded().calculate(inputs, jurisdiction_code)
}
