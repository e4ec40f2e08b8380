//! Domain entities for identifier resolution.
//!
//! - [`CatalogRecord`] / [`CatalogEntry`] - Upstream catalogue data before and after validation
//! - [`Snapshot`] - Immutable identifier → slug mapping built from one catalogue fetch

pub mod catalog_entry;
pub mod snapshot;

pub use catalog_entry::{CatalogEntry, CatalogRecord};
pub use snapshot::Snapshot;
