//! Shared decision flow for the surfaces that always answer themselves.

use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::api::response::fallback_response;
use crate::domain::decision::RedirectDecision;
use crate::domain::surface::Surface;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves `candidate` and renders the answer `surface` gives for it.
///
/// `None` means the request path had the wrong shape and resolution is not
/// attempted. A `PassThrough` fallback has nothing to pass through to here
/// and degrades to a 404.
pub async fn dispatch(state: &AppState, surface: Surface, candidate: Option<&str>) -> Response {
    let policy = surface.policy();
    let primary = state.hosts.primary.as_str();

    let Some(candidate) = candidate else {
        debug!(%surface, "No identifier candidate in request path");
        return fallback_response(policy.malformed, primary)
            .unwrap_or_else(|| AppError::NotFound.into_response());
    };

    let resolution = state.resolver.resolve(candidate).await;

    match RedirectDecision::for_resolution(resolution, primary, policy.found) {
        RedirectDecision::NotFound => fallback_response(policy.missing, primary)
            .unwrap_or_else(|| AppError::NotFound.into_response()),
        found => found.into_response(),
    }
}
