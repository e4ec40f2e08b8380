//! Identifier candidates and their extraction from request paths.

use axum::http::{HeaderMap, Uri, header};
use regex::Regex;
use std::sync::LazyLock;

/// Literal persistent identifier shape: 8-4-4-4-12 hexadecimal groups.
static IDENTIFIER_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});

/// First path segment under which identifiers are published.
pub const RESOURCE_SEGMENT: &str = "resource";

/// Returns true if `candidate` looks like a persistent identifier.
///
/// Only the shape is checked. The version and variant nibbles are not.
pub fn is_identifier_shaped(candidate: &str) -> bool {
    IDENTIFIER_SHAPE.is_match(candidate)
}

/// A dynamic path parameter as delivered by a router.
///
/// Catch-all routes hand over a sequence of segments while plain dynamic
/// segments hand over a single string. Both forms normalize to the same
/// bare candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathParam {
    Single(String),
    Sequence(Vec<String>),
}

impl PathParam {
    /// Splits a catch-all capture (`a/b/c`) into its segments.
    pub fn from_catch_all(raw: &str) -> Self {
        Self::Sequence(
            raw.trim_start_matches('/')
                .split('/')
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Normalizes to a bare, non-empty candidate.
    ///
    /// Sequences qualify only when they hold exactly one element.
    pub fn into_candidate(self) -> Option<String> {
        let candidate = match self {
            Self::Single(value) => value,
            Self::Sequence(mut values) if values.len() == 1 => values.pop()?,
            Self::Sequence(_) => return None,
        };

        (!candidate.is_empty()).then_some(candidate)
    }
}

impl From<String> for PathParam {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for PathParam {
    fn from(values: Vec<String>) -> Self {
        Self::Sequence(values)
    }
}

/// The parts of an inbound request that matter for resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    pub segments: Vec<String>,
    pub host: Option<String>,
}

impl ResolutionRequest {
    /// Splits a request path into percent-decoded segments.
    ///
    /// `/resource/abc` becomes `["resource", "abc"]`; a trailing slash yields
    /// a trailing empty segment so `/resource/abc/` has three segments. The
    /// path is decoded before splitting, the same way the router decodes a
    /// catch-all capture, so `%2F` separates segments on every surface.
    pub fn new(path: &str, host: Option<&str>) -> Self {
        let decoded = urlencoding::decode(path)
            .map(|p| p.into_owned())
            .unwrap_or_else(|_| path.to_owned());
        let trimmed = decoded.strip_prefix('/').unwrap_or(&decoded);
        let segments = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').map(str::to_owned).collect()
        };

        Self {
            segments,
            host: host.map(str::to_owned),
        }
    }

    /// Builds a request from its URI and headers.
    ///
    /// The host comes from the `Host` header, or from the URI authority when
    /// the header is absent (HTTP/2 carries it in `:authority`).
    pub fn from_parts(uri: &Uri, headers: &HeaderMap) -> Self {
        let host = request_host(uri, headers);
        Self::new(uri.path(), host.as_deref())
    }

    /// Candidate for paths shaped exactly `/resource/<candidate>`.
    pub fn resource_candidate(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [prefix, candidate] if prefix == RESOURCE_SEGMENT && !candidate.is_empty() => {
                Some(candidate)
            }
            _ => None,
        }
    }

    /// The second path segment, whatever the first one is.
    pub fn second_segment(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    /// Host without port, lowercased.
    pub fn hostname(&self) -> Option<String> {
        self.host.as_deref().map(strip_port).map(str::to_ascii_lowercase)
    }
}

/// Host the client addressed, as `host[:port]`.
///
/// Prefers the `Host` header and falls back to the URI authority, without
/// any userinfo.
pub fn request_host(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .or_else(|| {
            uri.authority().map(|authority| match authority.port_u16() {
                Some(port) => format!("{}:{}", authority.host(), port),
                None => authority.host().to_owned(),
            })
        })
}

/// Removes a trailing `:port` from a `Host` header value.
///
/// Handles IPv6 literals (`[::1]:8080` → `[::1]`).
pub fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        }
    } else {
        host.split(':').next().unwrap_or(host)
    }
}
