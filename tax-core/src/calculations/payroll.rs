//! Employee payroll taxes: Social Security and Medicare.
//!
//! | Component           | Base                                   |
//! |---------------------|----------------------------------------|
//! | Social Security     | income, capped at the wage base        |
//! | Medicare            | full income                            |
//! | Additional Medicare | income above the surtax threshold      |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::PayrollTax;
//! use tax_core::ReferenceData;
//!
//! let payroll = PayrollTax::new(ReferenceData::embedded().payroll());
//! let breakdown = payroll.calculate(dec!(75000));
//!
//! assert_eq!(breakdown.social_security, dec!(4650.000));
//! assert_eq!(breakdown.medicare, dec!(1087.5000));
//! assert_eq!(breakdown.total, dec!(5737.50));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::max;
use crate::models::PayrollTaxConfig;
use crate::reference::ReferenceData;

/// The three payroll components and their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTaxBreakdown {
    pub social_security: Decimal,
    pub medicare: Decimal,
    pub additional_medicare: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy)]
pub struct PayrollTax<'a> {
    config: &'a PayrollTaxConfig,
}

impl<'a> PayrollTax<'a> {
    pub fn new(config: &'a PayrollTaxConfig) -> Self {
        Self { config }
    }

    pub fn calculate(
        &self,
        income: Decimal,
    ) -> PayrollTaxBreakdown {
        let social_security = self.social_security(income);
        let medicare = self.medicare(income);
        let additional_medicare = self.additional_medicare(income);

        PayrollTaxBreakdown {
            social_security,
            medicare,
            additional_medicare,
            total: social_security + medicare + additional_medicare,
        }
    }

    /// Social Security tax; income above the wage base is not taxed.
    fn social_security(
        &self,
        income: Decimal,
    ) -> Decimal {
        income.min(self.config.ss_wage_base) * self.config.ss_tax_rate
    }

    fn medicare(
        &self,
        income: Decimal,
    ) -> Decimal {
        income * self.config.medicare_tax_rate
    }

    /// Surtax on the portion of income above the threshold.
    fn additional_medicare(
        &self,
        income: Decimal,
    ) -> Decimal {
        let excess = max(
            income - self.config.additional_medicare_threshold,
            Decimal::ZERO,
        );
        excess * self.config.additional_medicare_rate
    }
}

/// Total payroll tax on `income` under the built-in 2023 parameters.
pub fn payroll_tax(income: Decimal) -> Decimal {
    PayrollTax::new(ReferenceData::embedded().payroll())
        .calculate(income)
        .total
}
