//! Handler for the API endpoint bound to the identifier subdomain.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::api::dispatch::dispatch;
use crate::domain::identifier::{PathParam, request_host, strip_port};
use crate::domain::surface::Surface;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves identifiers requested on the identifier subdomain.
///
/// # Endpoint
///
/// `GET /resource/{*rest}` with `Host: <pid-host>` (or that HTTP/2 authority)
///
/// # Response Codes
///
/// - **308 Permanent Redirect**: `Location: https://<primary-host>/resource/<slug>`
/// - **404 Not Found**: unknown identifier, extra path segments, or a request
///   addressed to any other host
pub async fn pid_api_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Path(rest): Path<String>,
) -> Response {
    let on_pid_host = request_host(&uri, &headers)
        .is_some_and(|host| strip_port(&host).eq_ignore_ascii_case(&state.hosts.pid));

    if !on_pid_host {
        debug!("Identifier API request outside the identifier subdomain");
        return AppError::NotFound.into_response();
    }

    let candidate = PathParam::from_catch_all(&rest).into_candidate();

    dispatch(&state, Surface::Api, candidate.as_deref()).await
}
