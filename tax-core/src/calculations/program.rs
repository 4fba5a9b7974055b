//! Drill-down of a category amount into its subprograms.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{AllocationResult, ProgramBreakdown, SubprogramAllocation};
use crate::reference::ReferenceData;

/// Splits the household's amount for `category_name` across the category's
/// subprograms.
///
/// The amount is taken from the federal entries first, then state/local; a
/// category missing from the result (e.g. after a zero-tax run) uses zero.
/// Returns `None` when the category has no drill-down data.
pub fn program_breakdown(
    reference: &ReferenceData,
    result: &AllocationResult,
    category_name: &str,
) -> Option<ProgramBreakdown> {
    let detail = reference.program_detail(category_name)?;
    let category_amount = result
        .find_entry(category_name)
        .map(|entry| entry.amount)
        .unwrap_or(Decimal::ZERO);

    let subprograms = detail
        .subprograms
        .iter()
        .map(|sub| SubprogramAllocation {
            name: sub.name.clone(),
            percentage: sub.percentage,
            amount: category_amount * Decimal::from(sub.percentage) / dec!(100),
        })
        .collect();

    Some(ProgramBreakdown {
        category_name: detail.category_name.clone(),
        category_amount,
        subprograms,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::calculate_tax_allocations;
    use crate::models::HouseholdInputs;

    fn sample_result() -> AllocationResult {
        let inputs = HouseholdInputs::new(dec!(75000), dec!(400000), dec!(40000));
        calculate_tax_allocations(&inputs, "CA").unwrap()
    }

    #[test]
    fn breakdown_of_federal_category() {
        let breakdown =
            program_breakdown(ReferenceData::embedded(), &sample_result(), "Social Security")
                .unwrap();

        // 17545 * 0.21
        assert_eq!(breakdown.category_amount, dec!(3684.45));
        assert_eq!(breakdown.subprograms.len(), 3);
        assert_eq!(breakdown.subprograms[0].name, "Retirement Benefits");
        assert_eq!(breakdown.subprograms[0].amount, dec!(2763.3375));
    }

    #[test]
    fn breakdown_of_state_local_category() {
        let breakdown = program_breakdown(
            ReferenceData::embedded(),
            &sample_result(),
            "Public Safety & Police",
        )
        .unwrap();

        // 13475 * 0.07
        assert_eq!(breakdown.category_amount, dec!(943.25));
        let sum: Decimal = breakdown.subprograms.iter().map(|s| s.amount).sum();
        assert_eq!(sum, breakdown.category_amount);
    }

    #[test]
    fn breakdown_missing_for_category_without_details() {
        let breakdown =
            program_breakdown(ReferenceData::embedded(), &sample_result(), "Medicaid & CHIP");

        assert!(breakdown.is_none());
    }

    #[test]
    fn breakdown_of_empty_result_uses_zero_amount() {
        let empty = AllocationResult::empty("CA");

        let breakdown = program_breakdown(ReferenceData::embedded(), &empty, "Medicare").unwrap();

        assert_eq!(breakdown.category_amount, Decimal::ZERO);
        assert!(breakdown.subprograms.iter().all(|s| s.amount.is_zero()));
    }
}
