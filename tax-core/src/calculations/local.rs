//! County-level tax estimates.
//!
//! Property tax uses the county rate on the full property value. Local sales
//! tax assumes a fixed share of income (see
//! [`LOCAL_SPENDING_SHARE`](crate::reference::embedded::LOCAL_SPENDING_SHARE))
//! is spent inside the county.

use rust_decimal::Decimal;

use crate::models::{CountyProfile, LocalTaxEstimate};
use crate::reference::embedded::LOCAL_SPENDING_SHARE;

/// Estimates county taxes and the even per-program split.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::estimate_local_taxes;
/// use tax_core::ReferenceData;
///
/// let county = ReferenceData::embedded()
///     .county("CA", "Los Angeles County")
///     .unwrap();
///
/// let estimate = estimate_local_taxes(county, dec!(400000), dec!(75000));
///
/// assert_eq!(estimate.property_tax, dec!(3000));
/// assert_eq!(estimate.sales_tax, dec!(18.75));
/// ```
pub fn estimate_local_taxes(
    county: &CountyProfile,
    property_value: Decimal,
    annual_income: Decimal,
) -> LocalTaxEstimate {
    let property_tax = property_value * county.property_tax_rate;
    let sales_tax = annual_income * LOCAL_SPENDING_SHARE * county.local_sales_tax_rate;
    let total = property_tax + sales_tax;

    let per_program = if county.local_programs.is_empty() {
        Decimal::ZERO
    } else {
        total / Decimal::from(county.local_programs.len())
    };

    LocalTaxEstimate {
        county_name: county.name.clone(),
        property_tax,
        sales_tax,
        total,
        per_program,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::reference::ReferenceData;

    #[test]
    fn estimate_matches_hand_calculation() {
        let county = ReferenceData::embedded()
            .county("NY", "Nassau County")
            .unwrap();

        let estimate = estimate_local_taxes(county, dec!(500000), dec!(120000));

        assert_eq!(estimate.property_tax, dec!(10500));
        assert_eq!(estimate.sales_tax, dec!(540));
        assert_eq!(estimate.total, dec!(11040));
        assert_eq!(estimate.per_program, dec!(2760));
    }

    #[test]
    fn estimate_of_zero_inputs_is_zero() {
        let county = ReferenceData::embedded()
            .county("TX", "Dallas County")
            .unwrap();

        let estimate = estimate_local_taxes(county, Decimal::ZERO, Decimal::ZERO);

        assert_eq!(estimate.total, Decimal::ZERO);
        assert_eq!(estimate.per_program, Decimal::ZERO);
    }

    #[test]
    fn county_without_programs_has_zero_per_program() {
        let county = CountyProfile::new("Nowhere County", dec!(0.01), dec!(0.01), &[]);

        let estimate = estimate_local_taxes(&county, dec!(100000), dec!(50000));

        assert_eq!(estimate.total, dec!(1050));
        assert_eq!(estimate.per_program, Decimal::ZERO);
    }

    #[test]
    fn unknown_county_is_not_found() {
        assert!(ReferenceData::embedded().county("FL", "Nowhere County").is_none());
        assert!(ReferenceData::embedded().county("OH", "Franklin County").is_none());
    }
}
