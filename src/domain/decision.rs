//! Resolution outcomes and the redirect decisions built from them.

use axum::http::StatusCode;
use url::Url;

use super::identifier::RESOURCE_SEGMENT;

/// Result of looking an identifier up in the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found { slug: String },
    NotFound,
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }
}

/// What a surface answers for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    Found { location: String, status: StatusCode },
    NotFound,
}

impl RedirectDecision {
    /// Composes the canonical redirect for a resolution.
    pub fn for_resolution(resolution: Resolution, host: &str, status: StatusCode) -> Self {
        match resolution {
            Resolution::Found { slug } => RedirectDecision::Found {
                location: resource_url(host, &slug),
                status,
            },
            Resolution::NotFound => RedirectDecision::NotFound,
        }
    }
}

/// Canonical slug URL: `https://<host>/resource/<slug>`.
///
/// The slug is percent-encoded as a single path segment.
pub fn resource_url(host: &str, slug: &str) -> String {
    match Url::parse(&format!("https://{host}/")) {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.clear().push(RESOURCE_SEGMENT).push(slug);
            }
            url.into()
        }
        Err(_) => format!("https://{host}/{RESOURCE_SEGMENT}/{slug}"),
    }
}

/// Site root on `host`: `https://<host>/`.
pub fn root_url(host: &str) -> String {
    format!("https://{host}/")
}
