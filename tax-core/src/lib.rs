//! Household tax allocation engine.
//!
//! Estimates a household's federal and state/local taxes and allocates each
//! bucket across government spending categories. Everything here is pure and
//! synchronous; reference tables are either the built-in set
//! ([`ReferenceData::embedded`]) or supplied by the caller.

pub mod calculations;
pub mod format;
pub mod models;
pub mod reference;

pub use calculations::{AllocationEngine, AllocationError, calculate_tax_allocations};
pub use models::*;
pub use reference::{ReferenceData, ReferenceDataError, ReferenceTables};
