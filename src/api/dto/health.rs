//! DTOs for health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response with cache status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub surface: String,
    pub cache: CacheStatus,
}

/// Snapshot cache status for this instance.
#[derive(Debug, Serialize)]
pub struct CacheStatus {
    /// `cold`, `fresh`, or `stale`.
    pub state: String,
    pub entries: usize,
    pub skipped: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub built_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_ms: Option<u64>,

    pub freshness_window_ms: u64,
}
