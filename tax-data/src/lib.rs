//! CSV loaders for the allocation engine's reference tables.

pub mod loader;

pub use loader::{
    CategoryWeightLoader, CategoryWeights, JurisdictionLoader, ReferenceDataLoader,
    ReferenceLoaderError, TaxBracketLoader,
};
