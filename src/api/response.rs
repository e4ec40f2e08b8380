//! Response builders shared by every surface.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::decision::{RedirectDecision, root_url};
use crate::domain::surface::Fallback;
use crate::error::AppError;

/// Empty-bodied redirect with an arbitrary 3xx status.
///
/// `axum::response::Redirect` only covers 303/307/308; the proxy surface
/// also needs 301.
pub fn redirect(status: StatusCode, location: String) -> Response {
    (status, [(header::LOCATION, location)]).into_response()
}

/// Renders a fallback that produces a response on its own.
///
/// Returns `None` for [`Fallback::PassThrough`], which only the interception
/// layer can honour.
pub fn fallback_response(fallback: Fallback, primary_host: &str) -> Option<Response> {
    match fallback {
        Fallback::NotFound => Some(AppError::NotFound.into_response()),
        Fallback::RootRedirect(status) => Some(redirect(status, root_url(primary_host))),
        Fallback::PassThrough => None,
    }
}

impl IntoResponse for RedirectDecision {
    fn into_response(self) -> Response {
        match self {
            RedirectDecision::Found { location, status } => redirect(status, location),
            RedirectDecision::NotFound => AppError::NotFound.into_response(),
        }
    }
}
