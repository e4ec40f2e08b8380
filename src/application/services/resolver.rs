//! Identifier → slug resolution service.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::refresh_scheduler::RefreshScheduler;
use crate::domain::decision::Resolution;
use crate::domain::repositories::CatalogSource;

/// Resolves persistent identifiers against a privately owned snapshot cache.
///
/// Each resolver owns its own cache; two resolvers never share state. The
/// identifier is used verbatim, without format validation. Rejecting
/// malformed candidates is left to the surface that received them.
pub struct PidResolver {
    scheduler: RefreshScheduler,
}

impl PidResolver {
    /// Creates a resolver with a cold cache.
    pub fn new(source: Arc<dyn CatalogSource>, freshness_window: Duration) -> Self {
        Self {
            scheduler: RefreshScheduler::new(source, freshness_window),
        }
    }

    pub fn scheduler(&self) -> &RefreshScheduler {
        &self.scheduler
    }

    /// Resolves an identifier, refreshing the cache first as needed.
    ///
    /// # Request Flow
    ///
    /// 1. [`RefreshScheduler::ensure_fresh`] (blocks only while cold)
    /// 2. Lookup in the current snapshot
    ///
    /// A cold cache whose first fetch failed resolves everything to
    /// [`Resolution::NotFound`].
    pub async fn resolve(&self, identifier: &str) -> Resolution {
        self.scheduler.ensure_fresh(false).await;

        let resolution = self.lookup(identifier);
        let outcome = if resolution.is_found() {
            "found"
        } else {
            "not_found"
        };
        metrics::counter!("pid_resolutions_total", "outcome" => outcome).increment(1);
        debug!(identifier, outcome, "Resolved identifier");

        resolution
    }

    /// Looks up an identifier in the current snapshot without refreshing.
    pub fn lookup(&self, identifier: &str) -> Resolution {
        self.scheduler
            .mapping()
            .and_then(|snapshot| {
                snapshot
                    .slug_for(identifier)
                    .map(|slug| Resolution::Found {
                        slug: slug.to_owned(),
                    })
            })
            .unwrap_or(Resolution::NotFound)
    }
}
