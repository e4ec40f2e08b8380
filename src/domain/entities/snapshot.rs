//! Point-in-time identifier → slug mapping.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

use super::catalog_entry::CatalogRecord;

/// An immutable projection of the catalogue taken at a single moment.
///
/// Snapshots are never edited after construction. A refresh builds a new
/// one from scratch and the cache swaps it in as a whole.
#[derive(Debug, Clone)]
pub struct Snapshot {
    mapping: HashMap<String, String>,
    skipped: usize,
    built_at: DateTime<Utc>,
    built_instant: Instant,
}

impl Snapshot {
    /// Builds a snapshot from catalogue records, dropping any record that
    /// lacks an identifier or a slug.
    ///
    /// When an identifier appears more than once the last occurrence wins.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        let mut mapping = HashMap::new();
        let mut skipped = 0;

        for record in records {
            match record.into_entry() {
                Some(entry) => {
                    mapping.insert(entry.identifier, entry.slug);
                }
                None => skipped += 1,
            }
        }

        Self {
            mapping,
            skipped,
            built_at: Utc::now(),
            built_instant: Instant::now(),
        }
    }

    /// Looks up the current slug for an identifier.
    pub fn slug_for(&self, identifier: &str) -> Option<&str> {
        self.mapping.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Number of catalogue records excluded for missing fields.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Wall-clock time the snapshot was built.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn age(&self) -> Duration {
        self.built_instant.elapsed()
    }

    /// True once the snapshot is older than `window`.
    pub fn is_stale(&self, window: Duration) -> bool {
        self.age() > window
    }

    /// Iterates over `(identifier, slug)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mapping.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
