//! Top-level router configuration, one layout per deployment surface.
//!
//! # Route Structure
//!
//! | Surface       | Routes                                                     |
//! |---------------|------------------------------------------------------------|
//! | `redirector`  | any path (only `/resource/<candidate>` resolves)           |
//! | `route`       | `GET /resource/{*id}`, everything else 404                 |
//! | `proxy`       | any path (unresolved → 301 to the primary root)            |
//! | `api`         | `GET /resource/{*rest}` on the identifier host, else 404   |
//! | `interceptor` | interception layer wrapped around the site router          |
//!
//! Every surface also serves `GET /health`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Interception** - Identifier resolution ahead of site routing (interceptor only)

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};

use crate::api::handlers::{
    health_handler, pid_api_handler, proxy_handler, redirect_handler, route_handler,
};
use crate::api::middleware::{intercept, tracing};
use crate::domain::surface::Surface;
use crate::error::AppError;
use crate::state::AppState;

/// Constructs the router for the surface selected in `state`.
///
/// The interceptor surface wraps a placeholder site that answers 404 for
/// everything; embed [`intercepting_router`] directly to wrap a real site.
pub fn app_router(state: AppState) -> Router {
    let router = match state.surface {
        Surface::Redirector => Router::new().fallback(redirect_handler),
        Surface::Route => Router::new()
            .route("/resource/{*id}", get(route_handler))
            .fallback(not_found),
        Surface::Proxy => Router::new().fallback(proxy_handler),
        Surface::Api => Router::new()
            .route("/resource/{*rest}", get(pid_api_handler))
            .fallback(not_found),
        Surface::Interceptor => return intercepting_router(placeholder_site(), state),
    };

    router
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps `site` with the identifier interception layer.
///
/// Requests the layer does not answer reach `site` unchanged, including its
/// fallback.
pub fn intercepting_router(site: Router<AppState>, state: AppState) -> Router {
    site.route("/health", get(health_handler))
        .layer(middleware::from_fn_with_state(state.clone(), intercept::layer))
        .with_state(state)
        .layer(tracing::layer())
}

async fn not_found() -> AppError {
    AppError::NotFound
}

fn placeholder_site() -> Router<AppState> {
    Router::new().fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
}
