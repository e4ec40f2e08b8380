//! Data access trait definitions for the domain layer.
//!
//! - [`CatalogSource`] - Upstream resource catalogue
//!
//! Implementations live in `crate::infrastructure::catalog`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod catalog_source;

pub use catalog_source::CatalogSource;

#[cfg(test)]
pub use catalog_source::MockCatalogSource;
