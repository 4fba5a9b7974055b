use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat tax rates applied by one state-level jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionProfile {
    /// Two-letter postal code, e.g. `CA` or `DC`.
    pub code: String,
    pub display_name: String,
    pub income_tax_rate: Decimal,
    pub sales_tax_rate: Decimal,
    pub property_tax_rate: Decimal,
}

impl JurisdictionProfile {
    pub fn new(
        code: &str,
        display_name: &str,
        income_tax_rate: Decimal,
        sales_tax_rate: Decimal,
        property_tax_rate: Decimal,
    ) -> Self {
        Self {
            code: code.to_string(),
            display_name: display_name.to_string(),
            income_tax_rate,
            sales_tax_rate,
            property_tax_rate,
        }
    }

    /// The three rates with their names, in a fixed order.
    pub fn rates(&self) -> [(&'static str, Decimal); 3] {
        [
            ("income_tax_rate", self.income_tax_rate),
            ("sales_tax_rate", self.sales_tax_rate),
            ("property_tax_rate", self.property_tax_rate),
        ]
    }
}
