use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a progressive income tax schedule.
///
/// A bracket covers incomes up to and including `max_income`; the top bracket
/// has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxBracket {
    /// Returns `true` if `income` is at or below this bracket's upper bound.
    pub fn covers(
        &self,
        income: Decimal,
    ) -> bool {
        self.max_income.is_none_or(|max| income <= max)
    }
}
