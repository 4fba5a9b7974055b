use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// County-level rates and the local programs they fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyProfile {
    pub name: String,
    pub property_tax_rate: Decimal,
    pub local_sales_tax_rate: Decimal,
    pub local_programs: Vec<String>,
}

impl CountyProfile {
    pub fn new(
        name: &str,
        property_tax_rate: Decimal,
        local_sales_tax_rate: Decimal,
        local_programs: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            property_tax_rate,
            local_sales_tax_rate,
            local_programs: local_programs.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Estimated county taxes for one household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTaxEstimate {
    pub county_name: String,
    pub property_tax: Decimal,
    pub sales_tax: Decimal,
    pub total: Decimal,
    /// Even split of `total` across the county's listed programs.
    pub per_program: Decimal,
}
