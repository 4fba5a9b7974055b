use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee-side payroll tax parameters for a single tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTaxConfig {
    pub ss_wage_base: Decimal,
    pub ss_tax_rate: Decimal,
    pub medicare_tax_rate: Decimal,
    pub additional_medicare_threshold: Decimal,
    pub additional_medicare_rate: Decimal,
}
