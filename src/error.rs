//! Error types for catalogue fetching and HTTP responses.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Body returned with every 404 produced by a resolving surface.
pub const NOT_FOUND_BODY: &str = "Persistent identifier not found.";

/// Failures while fetching or decoding the upstream catalogue.
///
/// These never reach clients. A failed refresh keeps the previous snapshot
/// and the error is only logged.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog responded with HTTP {0}")]
    Status(u16),

    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog document is not a JSON array: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for catalogue operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// Short label used as a metrics tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
        }
    }
}

/// Client-visible error responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The identifier is unknown, malformed, or the cache is still cold.
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                NOT_FOUND_BODY,
            )
                .into_response(),
        }
    }
}
