//! Handlers for the path-based redirector and the dedicated identifier route.

use axum::{
    extract::{Path, State},
    http::Uri,
    response::Response,
};

use crate::api::dispatch::dispatch;
use crate::domain::identifier::{PathParam, ResolutionRequest};
use crate::domain::surface::Surface;
use crate::state::AppState;

/// Generic path-based redirector.
///
/// # Endpoint
///
/// Any path; only `/resource/<candidate>` is resolved.
///
/// # Response Codes
///
/// - **303 See Other**: `Location: https://<primary-host>/resource/<slug>`
/// - **404 Not Found**: unknown identifier, cold cache, or any other path shape
pub async fn redirect_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let request = ResolutionRequest::new(uri.path(), None);

    dispatch(&state, Surface::Redirector, request.resource_candidate()).await
}

/// Dedicated single-identifier route.
///
/// # Endpoint
///
/// `GET /resource/{*id}`
///
/// The catch-all capture arrives as a sequence of segments; exactly one
/// segment is accepted and normalized to a bare identifier.
///
/// # Response Codes
///
/// - **303 See Other**: `Location: https://<primary-host>/resource/<slug>`
/// - **404 Not Found**: unknown identifier or more than one segment
pub async fn route_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let candidate = PathParam::from_catch_all(&id).into_candidate();

    dispatch(&state, Surface::Route, candidate.as_deref()).await
}
