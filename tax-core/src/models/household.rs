use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Annual financial figures for one household.
///
/// All three amounts are expected to be non-negative; the allocation engine
/// rejects negative values rather than clamping them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdInputs {
    pub annual_income: Decimal,
    pub property_value: Decimal,
    pub annual_spending: Decimal,
}

impl HouseholdInputs {
    pub fn new(
        annual_income: Decimal,
        property_value: Decimal,
        annual_spending: Decimal,
    ) -> Self {
        Self {
            annual_income,
            property_value,
            annual_spending,
        }
    }

    /// Named fields in a fixed order, for validation and reporting.
    pub fn fields(&self) -> [(&'static str, Decimal); 3] {
        [
            ("annual_income", self.annual_income),
            ("property_value", self.property_value),
            ("annual_spending", self.annual_spending),
        ]
    }
}
