//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CacheStatus, HealthResponse};
use crate::state::AppState;

/// Returns service health and cache status.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always answers **200 OK**. A cold cache is reported rather than treated
/// as an outage, since every surface degrades to not-found while cold.
/// Never triggers a catalogue refresh.
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "version": "0.1.0",
///   "surface": "proxy",
///   "cache": {
///     "state": "fresh",
///     "entries": 412,
///     "skipped": 3,
///     "built_at": "2026-10-19T08:00:00Z",
///     "age_ms": 42150,
///     "freshness_window_ms": 300000
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        surface: state.surface.to_string(),
        cache: cache_status(&state),
    })
}

fn cache_status(state: &AppState) -> CacheStatus {
    let scheduler = state.resolver.scheduler();
    let snapshot = scheduler.mapping();

    CacheStatus {
        state: scheduler.state().as_str().to_string(),
        entries: snapshot.as_ref().map_or(0, |s| s.len()),
        skipped: snapshot.as_ref().map_or(0, |s| s.skipped()),
        built_at: snapshot.as_ref().map(|s| s.built_at()),
        age_ms: snapshot
            .as_ref()
            .map(|s| u64::try_from(s.age().as_millis()).unwrap_or(u64::MAX)),
        freshness_window_ms: u64::try_from(scheduler.freshness_window().as_millis())
            .unwrap_or(u64::MAX),
    }
}
