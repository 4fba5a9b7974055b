use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named slice of a spending category, as a whole percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subprogram {
    pub name: String,
    pub percentage: u32,
}

/// Drill-down data for one spending category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDetail {
    pub category_name: String,
    pub subprograms: Vec<Subprogram>,
}

impl ProgramDetail {
    pub fn new(
        category_name: &str,
        subprograms: &[(&str, u32)],
    ) -> Self {
        Self {
            category_name: category_name.to_string(),
            subprograms: subprograms
                .iter()
                .map(|(name, percentage)| Subprogram {
                    name: name.to_string(),
                    percentage: *percentage,
                })
                .collect(),
        }
    }
}

/// A subprogram with its share of the household's category amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubprogramAllocation {
    pub name: String,
    pub percentage: u32,
    pub amount: Decimal,
}

/// Category amount split across its subprograms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramBreakdown {
    pub category_name: String,
    pub category_amount: Decimal,
    pub subprograms: Vec<SubprogramAllocation>,
}
