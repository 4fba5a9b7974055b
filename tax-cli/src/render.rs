//! Text and JSON views of engine output.
//!
//! Each view wraps borrowed engine types and implements [`fmt::Display`] so
//! `main` can print it directly.

use std::fmt;

use serde::Serialize;
use tax_core::format::{format_currency, format_percent, format_rate};
use tax_core::{
    AllocationEntry, AllocationResult, Bucket, CountyProfile, JurisdictionProfile,
    LocalTaxEstimate, ProgramBreakdown,
};

/// Full result of one `calculate` run, as emitted with `--json`.
#[derive(Debug, Serialize)]
pub struct CalculationReport<'a> {
    pub jurisdiction_name: &'a str,
    pub allocation: &'a AllocationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<&'a LocalTaxEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<&'a ProgramBreakdown>,
}

impl CalculationReport<'_> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn money(amount: rust_decimal::Decimal) -> String {
    format_currency(Some(amount))
}

fn write_entries(
    f: &mut fmt::Formatter<'_>,
    entries: &[AllocationEntry],
) -> fmt::Result {
    for entry in entries {
        writeln!(
            f,
            "    {:<36} {:>10} {:>5}",
            entry.category_name,
            money(entry.amount),
            format_percent(entry.percentage_of_bucket)
        )?;
    }
    Ok(())
}

/// The two buckets, their components and every category allocation.
pub struct AllocationView<'a> {
    pub result: &'a AllocationResult,
    pub jurisdiction: &'a JurisdictionProfile,
}

impl fmt::Display for AllocationView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.result;
        let components = &result.components;

        writeln!(
            f,
            "Jurisdiction:        {} ({})",
            self.jurisdiction.display_name, self.jurisdiction.code
        )?;
        writeln!(f, "Total estimated tax: {}", money(result.total_tax))?;

        if result.total_tax.is_zero() {
            return write!(f, "No tax owed; nothing to allocate.");
        }

        writeln!(f)?;
        writeln!(
            f,
            "{}: {} ({})",
            Bucket::Federal,
            money(result.federal_bucket_total),
            format_percent(result.federal_share_percent)
        )?;
        writeln!(
            f,
            "  Income tax:   {}",
            money(components.federal_income_tax)
        )?;
        writeln!(f, "  Payroll tax:  {}", money(components.payroll_tax))?;
        write_entries(f, &result.federal_allocations)?;

        writeln!(f)?;
        writeln!(
            f,
            "{}: {} ({})",
            Bucket::StateLocal,
            money(result.state_local_bucket_total),
            format_percent(result.state_local_share_percent)
        )?;
        writeln!(
            f,
            "  Income tax:   {}",
            money(components.state_income_tax)
        )?;
        writeln!(f, "  Property tax: {}", money(components.property_tax))?;
        writeln!(f, "  Sales tax:    {}", money(components.sales_tax))?;
        write_entries(f, &result.state_local_allocations)
    }
}

/// County estimate with the even per-program split.
pub struct LocalView<'a> {
    pub estimate: &'a LocalTaxEstimate,
    pub county: &'a CountyProfile,
}

impl fmt::Display for LocalView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let estimate = self.estimate;

        writeln!(f, "{} local taxes", estimate.county_name)?;
        writeln!(
            f,
            "  Property tax: {} at {}",
            money(estimate.property_tax),
            format_rate(self.county.property_tax_rate, 3)
        )?;
        writeln!(
            f,
            "  Sales tax:    {} at {}",
            money(estimate.sales_tax),
            format_rate(self.county.local_sales_tax_rate, 2)
        )?;
        write!(f, "  Total:        {}", money(estimate.total))?;

        for program in &self.county.local_programs {
            write!(
                f,
                "\n    {:<36} {:>10}",
                program,
                money(estimate.per_program)
            )?;
        }
        Ok(())
    }
}

/// Subprogram split of one category.
pub struct ProgramView<'a>(pub &'a ProgramBreakdown);

impl fmt::Display for ProgramView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let breakdown = self.0;

        write!(
            f,
            "{}: {}",
            breakdown.category_name,
            money(breakdown.category_amount)
        )?;
        for sub in &breakdown.subprograms {
            write!(
                f,
                "\n    {:<36} {:>10} {:>5}",
                sub.name,
                money(sub.amount),
                format_percent(sub.percentage)
            )?;
        }
        Ok(())
    }
}

/// Every jurisdiction with its three rates, in selector order.
pub struct JurisdictionList<'a>(pub &'a [JurisdictionProfile]);

impl fmt::Display for JurisdictionList<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{:<4} {:<20} {:>8} {:>8} {:>9}",
            "Code", "Name", "Income", "Sales", "Property"
        )?;
        for j in self.0 {
            write!(
                f,
                "\n{:<4} {:<20} {:>8} {:>8} {:>9}",
                j.code,
                j.display_name,
                format_rate(j.income_tax_rate, 2),
                format_rate(j.sales_tax_rate, 2),
                format_rate(j.property_tax_rate, 3)
            )?;
        }
        Ok(())
    }
}

/// Counties known for one jurisdiction.
pub struct CountyList<'a> {
    pub jurisdiction: &'a JurisdictionProfile,
    pub counties: &'a [CountyProfile],
}

impl fmt::Display for CountyList<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.counties.is_empty() {
            return write!(
                f,
                "No county data for {} ({}).",
                self.jurisdiction.display_name, self.jurisdiction.code
            );
        }

        write!(f, "Counties in {}:", self.jurisdiction.display_name)?;
        for county in self.counties {
            write!(
                f,
                "\n  {:<24} property {:>7}  local sales {:>6}  programs: {}",
                county.name,
                format_rate(county.property_tax_rate, 3),
                format_rate(county.local_sales_tax_rate, 2),
                county.local_programs.join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::calculations::{estimate_local_taxes, program_breakdown};
    use tax_core::{HouseholdInputs, ReferenceData, calculate_tax_allocations};

    use super::*;

    fn worked_example() -> AllocationResult {
        calculate_tax_allocations(
            &HouseholdInputs::new(dec!(75000), dec!(400000), dec!(40000)),
            "CA",
        )
        .unwrap()
    }

    fn california() -> &'static JurisdictionProfile {
        ReferenceData::embedded().jurisdiction("CA").unwrap()
    }

    #[test]
    fn allocation_view_shows_buckets_and_categories() {
        let result = worked_example();
        let text = AllocationView {
            result: &result,
            jurisdiction: california(),
        }
        .to_string();

        assert!(text.starts_with("Jurisdiction:        California (CA)\n"));
        assert!(text.contains("Total estimated tax: $31,020"));
        assert!(text.contains("Federal: $17,545 (57%)"));
        assert!(text.contains("State & Local: $13,475 (43%)"));
        assert!(text.contains("  Income tax:   $11,808"));
        assert!(text.contains("  Payroll tax:  $5,738"));
        assert!(text.contains("Defense & Military"));
        assert!(text.contains("$2,281"));
    }

    #[test]
    fn allocation_view_for_zero_tax() {
        let result = AllocationResult::empty("CA");
        let text = AllocationView {
            result: &result,
            jurisdiction: california(),
        }
        .to_string();

        assert_eq!(
            text,
            "Jurisdiction:        California (CA)\n\
             Total estimated tax: $0\n\
             No tax owed; nothing to allocate."
        );
    }

    #[test]
    fn local_view_lists_programs() {
        let county = ReferenceData::embedded()
            .county("CA", "Los Angeles County")
            .unwrap();
        let estimate = estimate_local_taxes(county, dec!(400000), dec!(75000));

        let text = LocalView {
            estimate: &estimate,
            county,
        }
        .to_string();

        assert!(text.starts_with("Los Angeles County local taxes\n"));
        assert!(text.contains("  Property tax: $3,000 at 0.750%"));
        assert_eq!(text.lines().count(), 4 + county.local_programs.len());
    }

    #[test]
    fn program_view_lists_subprograms() {
        let result = worked_example();
        let breakdown =
            program_breakdown(ReferenceData::embedded(), &result, "Defense & Military").unwrap();

        let text = ProgramView(&breakdown).to_string();

        assert!(text.starts_with("Defense & Military: $2,281"));
        assert_eq!(text.lines().count(), 1 + breakdown.subprograms.len());
    }

    #[test]
    fn jurisdiction_list_has_header_and_every_row() {
        let jurisdictions = ReferenceData::embedded().jurisdictions();

        let text = JurisdictionList(jurisdictions).to_string();

        assert_eq!(text.lines().count(), 52);
        assert!(text.lines().nth(5).unwrap().starts_with("CA   California"));
    }

    #[test]
    fn county_list_without_data() {
        let data = ReferenceData::embedded();
        let ohio = data.jurisdiction("OH").unwrap();

        let text = CountyList {
            jurisdiction: ohio,
            counties: data.counties("OH"),
        }
        .to_string();

        assert_eq!(text, "No county data for Ohio (OH).");
    }

    #[test]
    fn report_json_skips_missing_sections() {
        let result = worked_example();
        let report = CalculationReport {
            jurisdiction_name: "California",
            allocation: &result,
            local: None,
            program: None,
        };

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["jurisdiction_name"], "California");
        assert_eq!(json["allocation"]["federal_share_percent"], 57);
        assert!(json.get("local").is_none());
        assert!(json.get("program").is_none());
    }
}
