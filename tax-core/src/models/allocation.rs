use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The portion of one bucket assigned to one spending category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub category_name: String,
    pub amount: Decimal,
    /// Whole-number share of the bucket, 0 to 100.
    pub percentage_of_bucket: u32,
    pub display_color: String,
}

/// Individual taxes that make up the two bucket totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComponents {
    pub federal_income_tax: Decimal,
    pub payroll_tax: Decimal,
    pub state_income_tax: Decimal,
    pub property_tax: Decimal,
    pub sales_tax: Decimal,
}

impl TaxComponents {
    pub fn federal_total(&self) -> Decimal {
        self.federal_income_tax + self.payroll_tax
    }

    pub fn state_local_total(&self) -> Decimal {
        self.state_income_tax + self.property_tax + self.sales_tax
    }
}

/// Complete output of one allocation run.
///
/// When `total_tax` is zero every figure is zero and both allocation
/// sequences are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Code of the profile actually used, after fallback resolution.
    pub jurisdiction_code: String,
    pub total_tax: Decimal,
    pub federal_bucket_total: Decimal,
    pub state_local_bucket_total: Decimal,
    pub federal_share_percent: u32,
    pub state_local_share_percent: u32,
    pub federal_allocations: Vec<AllocationEntry>,
    pub state_local_allocations: Vec<AllocationEntry>,
    pub components: TaxComponents,
}

impl AllocationResult {
    /// Zero-valued result used when the household owes nothing.
    pub fn empty(jurisdiction_code: &str) -> Self {
        Self {
            jurisdiction_code: jurisdiction_code.to_string(),
            total_tax: Decimal::ZERO,
            federal_bucket_total: Decimal::ZERO,
            state_local_bucket_total: Decimal::ZERO,
            federal_share_percent: 0,
            state_local_share_percent: 0,
            federal_allocations: Vec::new(),
            state_local_allocations: Vec::new(),
            components: TaxComponents::default(),
        }
    }

    /// Looks up a category, federal entries first.
    pub fn find_entry(
        &self,
        category_name: &str,
    ) -> Option<&AllocationEntry> {
        self.federal_allocations
            .iter()
            .chain(self.state_local_allocations.iter())
            .find(|entry| entry.category_name == category_name)
    }
}
