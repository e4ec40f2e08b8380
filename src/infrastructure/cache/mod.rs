//! Replica-local snapshot cache.
//!
//! Each resolver instance owns its own [`SnapshotStore`]. Nothing is shared
//! across processes and nothing is persisted.

mod snapshot_store;

pub use snapshot_store::SnapshotStore;
