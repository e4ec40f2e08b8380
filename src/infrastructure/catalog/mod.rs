//! Upstream catalogue access.
//!
//! - [`HttpCatalogSource`] - Fetches `resources.json` from the primary host

mod http_catalog;

pub use http_catalog::HttpCatalogSource;
