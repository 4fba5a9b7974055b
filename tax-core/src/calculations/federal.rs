//! Progressive federal income tax.
//!
//! The schedule is evaluated by picking the first bracket, from the lowest,
//! whose upper bound is at or above the income, then applying
//! `base_tax + (income - min_income) * tax_rate`. Bracket bounds are
//! inclusive on the top, so an income exactly on a boundary is taxed by the
//! lower bracket.
//!
//! The built-in base amounts are used as published. At 182050 and 231250 they
//! do not line up with the previous bracket's formula, so the tax steps up by
//! 12 and then down by 16 when crossing those two boundaries. Every other
//! boundary is continuous.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::FederalIncomeTax;
//! use tax_core::ReferenceData;
//!
//! let reference = ReferenceData::embedded();
//! let calculator = FederalIncomeTax::new(reference.brackets());
//!
//! // 5147 + (75000 - 44725) * 0.22
//! assert_eq!(calculator.calculate(dec!(75000)), dec!(11807.50));
//! ```

use rust_decimal::Decimal;

use crate::models::TaxBracket;
use crate::reference::ReferenceData;

/// Calculator over a bracket schedule sorted by `min_income`.
#[derive(Debug, Clone, Copy)]
pub struct FederalIncomeTax<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> FederalIncomeTax<'a> {
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Returns the bracket that taxes `income`.
    ///
    /// Falls back to the top bracket so a schedule whose last bracket is
    /// bounded still yields a result; `None` only for an empty schedule.
    pub fn bracket_for(
        &self,
        income: Decimal,
    ) -> Option<&'a TaxBracket> {
        self.brackets
            .iter()
            .find(|b| b.covers(income))
            .or_else(|| self.brackets.last())
    }

    /// Tax owed on `income`.
    ///
    /// Negative income is not rejected here: it lands in the first bracket
    /// and produces a negative amount.
    pub fn calculate(
        &self,
        income: Decimal,
    ) -> Decimal {
        match self.bracket_for(income) {
            Some(bracket) => bracket.base_tax + (income - bracket.min_income) * bracket.tax_rate,
            None => Decimal::ZERO,
        }
    }
}

/// Federal income tax on `income` under the built-in 2023 schedule.
pub fn federal_income_tax(income: Decimal) -> Decimal {
    FederalIncomeTax::new(ReferenceData::embedded().brackets()).calculate(income)
}
