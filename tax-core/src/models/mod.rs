mod allocation;
mod category;
mod county;
mod household;
mod jurisdiction;
mod payroll_config;
mod program;
mod tax_bracket;

pub use allocation::{AllocationEntry, AllocationResult, TaxComponents};
pub use category::{Bucket, CategoryWeight};
pub use county::{CountyProfile, LocalTaxEstimate};
pub use household::HouseholdInputs;
pub use jurisdiction::JurisdictionProfile;
pub use payroll_config::PayrollTaxConfig;
pub use program::{ProgramBreakdown, ProgramDetail, Subprogram, SubprogramAllocation};
pub use tax_bracket::TaxBracket;
