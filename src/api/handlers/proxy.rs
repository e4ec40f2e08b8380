//! Handler for the standalone redirecting proxy.

use axum::{extract::State, http::Uri, response::Response};

use crate::api::dispatch::dispatch;
use crate::domain::identifier::ResolutionRequest;
use crate::domain::surface::Surface;
use crate::state::AppState;

/// Answers every request the proxy receives.
///
/// # Response Codes
///
/// - **308 Permanent Redirect**: `/resource/<candidate>` resolved to a slug
/// - **301 Moved Permanently**: `Location: https://<primary-host>/` for anything else
///
/// The proxy never answers 404.
pub async fn proxy_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let request = ResolutionRequest::new(uri.path(), None);

    dispatch(&state, Surface::Proxy, request.resource_candidate()).await
}
