//! Freshness policy for the catalogue snapshot.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, warn};

use crate::domain::entities::Snapshot;
use crate::domain::repositories::CatalogSource;
use crate::error::CatalogResult;
use crate::infrastructure::cache::SnapshotStore;

/// Default freshness window: five minutes.
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_millis(300_000);

/// Cache state observed at the start of [`RefreshScheduler::ensure_fresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No snapshot was ever built.
    Cold,
    /// Snapshot younger than the freshness window.
    Fresh,
    /// Snapshot older than the freshness window.
    Stale,
}

impl CacheState {
    pub fn as_str(self) -> &'static str {
        match self {
            CacheState::Cold => "cold",
            CacheState::Fresh => "fresh",
            CacheState::Stale => "stale",
        }
    }
}

/// Summary of a successful refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshReport {
    pub entries: usize,
    pub skipped: usize,
}

/// Decides per request whether the snapshot can be used as-is, needs a
/// background refresh, or must be built before the request continues.
///
/// # Refresh Strategy
///
/// - **Cold**: fetch synchronously; concurrent cold callers queue behind one
///   fetch and reuse its result
/// - **Stale**: serve the current snapshot and rebuild in a tracked
///   background task (at most one in flight)
/// - **Fresh**: nothing to do
///
/// A failed fetch never replaces or clears the current snapshot.
pub struct RefreshScheduler {
    store: Arc<SnapshotStore>,
    source: Arc<dyn CatalogSource>,
    freshness_window: Duration,
    background: TaskTracker,
    refreshing: Arc<AtomicBool>,
    cold_fill: Mutex<()>,
}

impl RefreshScheduler {
    /// Creates a scheduler with a cold store.
    pub fn new(source: Arc<dyn CatalogSource>, freshness_window: Duration) -> Self {
        Self {
            store: Arc::new(SnapshotStore::new()),
            source,
            freshness_window,
            background: TaskTracker::new(),
            refreshing: Arc::new(AtomicBool::new(false)),
            cold_fill: Mutex::new(()),
        }
    }

    /// Current snapshot without blocking; `None` while cold.
    pub fn mapping(&self) -> Option<Arc<Snapshot>> {
        self.store.load()
    }

    pub fn freshness_window(&self) -> Duration {
        self.freshness_window
    }

    /// Classifies the current snapshot without side effects.
    pub fn state(&self) -> CacheState {
        match self.store.load() {
            None => CacheState::Cold,
            Some(snapshot) if snapshot.is_stale(self.freshness_window) => CacheState::Stale,
            Some(_) => CacheState::Fresh,
        }
    }

    /// Brings the snapshot up to date according to its age.
    ///
    /// A cold store is always filled synchronously. A stale store is
    /// refreshed in the background unless `blocking` is set, in which case
    /// the refresh is awaited.
    ///
    /// Returns the state observed before any refresh.
    pub async fn ensure_fresh(&self, blocking: bool) -> CacheState {
        let state = self.state();

        match state {
            CacheState::Cold => self.fill_cold().await,
            CacheState::Stale if blocking => {
                let _ = self.refresh().await;
            }
            CacheState::Stale => self.spawn_refresh(),
            CacheState::Fresh => {}
        }

        state
    }

    /// Fetches the catalogue and publishes a new snapshot.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the previous snapshot is kept.
    pub async fn refresh(&self) -> CatalogResult<RefreshReport> {
        refresh_catalog(&self.store, self.source.as_ref()).await
    }

    /// Waits for every background refresh spawned so far.
    pub async fn drain(&self) {
        self.background.close();
        self.background.wait().await;
        self.background.reopen();
    }

    async fn fill_cold(&self) {
        let _guard = self.cold_fill.lock().await;

        if !self.store.is_cold() {
            debug!("Snapshot filled while waiting for cold fetch");
            return;
        }

        debug!("Cold cache, fetching catalogue before serving");
        let _ = self.refresh().await;
    }

    fn spawn_refresh(&self) {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Background refresh already in flight");
            return;
        }

        let in_flight = InFlight(self.refreshing.clone());
        let store = self.store.clone();
        let source = self.source.clone();

        debug!("Snapshot stale, scheduling background refresh");
        self.background.spawn(async move {
            let _in_flight = in_flight;
            let _ = refresh_catalog(&store, source.as_ref()).await;
        });
    }
}

/// Clears the single-flight flag when the background task ends, even on panic.
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

async fn refresh_catalog(
    store: &SnapshotStore,
    source: &dyn CatalogSource,
) -> CatalogResult<RefreshReport> {
    match source.fetch_catalog().await {
        Ok(records) => {
            let snapshot = Snapshot::build(records);
            let report = RefreshReport {
                entries: snapshot.len(),
                skipped: snapshot.skipped(),
            };
            store.replace(snapshot);

            metrics::counter!("pid_catalog_refresh_total", "outcome" => "success").increment(1);
            info!(
                entries = report.entries,
                skipped = report.skipped,
                "Catalogue snapshot refreshed"
            );
            Ok(report)
        }
        Err(e) => {
            metrics::counter!("pid_catalog_refresh_total", "outcome" => e.kind()).increment(1);
            warn!(error = %e, "Catalogue refresh failed, keeping previous snapshot");
            Err(e)
        }
    }
}
