//! Source trait for the upstream resource catalogue.

use crate::domain::entities::CatalogRecord;
use crate::error::CatalogResult;
use async_trait::async_trait;

/// Read access to the authoritative list of catalogue entries.
///
/// The catalogue is polled, never pushed. Each call performs one complete
/// fetch; implementations do no caching of their own.
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::HttpCatalogSource`] - `GET <catalog-url>` over HTTPS
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches every record in the catalogue.
    ///
    /// Records are returned unvalidated; filtering incomplete ones is the
    /// caller's job.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Status`](crate::error::CatalogError::Status) on a non-success HTTP status
    /// - [`CatalogError::Transport`](crate::error::CatalogError::Transport) on connection or body read failures
    /// - [`CatalogError::Decode`](crate::error::CatalogError::Decode) if the document is not a JSON array
    async fn fetch_catalog(&self) -> CatalogResult<Vec<CatalogRecord>>;
}
