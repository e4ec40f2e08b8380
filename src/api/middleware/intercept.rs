//! Request-interception layer that resolves identifiers in front of the site.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::api::response::{fallback_response, redirect};
use crate::domain::decision::{Resolution, resource_url};
use crate::domain::identifier::{ResolutionRequest, is_identifier_shaped};
use crate::domain::surface::Surface;
use crate::state::AppState;

/// Intercepts identifier requests before they reach the wrapped site router.
///
/// # Identifier Subdomain
///
/// The identifier is the second path segment, whatever the first one is.
///
/// - Candidate fails the identifier shape check: redirect to the primary
///   host root without resolving
/// - Resolved: **308** to `https://<primary-host>/resource/<slug>`
/// - Not resolved, or fewer than two segments: falls through to the site
///
/// # Primary Domain
///
/// Only `/resource/<identifier>` with an identifier-shaped candidate is
/// considered, so slug URLs on the same path pass untouched.
///
/// - Resolved: **308** to `https://<requesting-host>/resource/<slug>`
/// - Anything else: no-op
///
/// Requests for any other host are never intercepted.
///
/// # Example
///
/// ```rust,ignore
/// let app = site_router
///     .layer(middleware::from_fn_with_state(state.clone(), intercept::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let request = ResolutionRequest::from_parts(req.uri(), req.headers());

    match intercept(&st, &request).await {
        Some(response) => response,
        None => next.run(req).await,
    }
}

async fn intercept(st: &AppState, request: &ResolutionRequest) -> Option<Response> {
    let hostname = request.hostname()?;
    let policy = Surface::Interceptor.policy();

    if hostname == st.hosts.pid {
        let candidate = request.second_segment().filter(|c| !c.is_empty())?;

        if !is_identifier_shaped(candidate) {
            debug!(candidate, "Candidate is not identifier-shaped, redirecting to root");
            return fallback_response(policy.malformed, &st.hosts.primary);
        }

        match st.resolver.resolve(candidate).await {
            Resolution::Found { slug } => Some(redirect(
                policy.found,
                resource_url(&st.hosts.primary, &slug),
            )),
            Resolution::NotFound => fallback_response(policy.missing, &st.hosts.primary),
        }
    } else if hostname == st.hosts.primary {
        let candidate = request
            .resource_candidate()
            .filter(|c| is_identifier_shaped(c))?;

        match st.resolver.resolve(candidate).await {
            Resolution::Found { slug } => {
                let requesting_host = request.host.as_deref().unwrap_or(&st.hosts.primary);
                Some(redirect(policy.found, resource_url(requesting_host, &slug)))
            }
            Resolution::NotFound => None,
        }
    } else {
        None
    }
}
