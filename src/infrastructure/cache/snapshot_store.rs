//! Lock-free holder for the current catalogue snapshot.

use arc_swap::ArcSwapOption;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::Snapshot;

/// In-process, replica-local snapshot cache.
///
/// Starts empty. Readers get an `Arc` to whichever snapshot was current at
/// load time and keep it for as long as they need; a concurrent
/// [`replace`](Self::replace) swaps the pointer without touching snapshots
/// already handed out.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: ArcSwapOption<Snapshot>,
}

impl SnapshotStore {
    /// Creates an empty (cold) store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot, or `None` if none was ever stored.
    pub fn load(&self) -> Option<Arc<Snapshot>> {
        self.current.load_full()
    }

    pub fn is_cold(&self) -> bool {
        self.current.load().is_none()
    }

    /// Publishes a new snapshot, replacing the old one as a whole.
    pub fn replace(&self, snapshot: Snapshot) {
        debug!(entries = snapshot.len(), "Publishing catalogue snapshot");
        self.current.store(Some(Arc::new(snapshot)));
    }
}
