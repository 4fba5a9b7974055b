//! Tax calculation modules for the allocation engine.
//!
//! Federal income tax and payroll tax feed the federal bucket; jurisdiction
//! rates feed the state/local bucket; both buckets are then fanned out over
//! their category weights.

pub mod allocation;
pub mod common;
pub mod federal;
pub mod local;
pub mod payroll;
pub mod program;

pub use allocation::{AllocationEngine, AllocationError, calculate_tax_allocations, fan_out};
pub use federal::{FederalIncomeTax, federal_income_tax};
pub use local::estimate_local_taxes;
pub use payroll::{PayrollTax, PayrollTaxBreakdown, payroll_tax};
pub use program::program_breakdown;
