//! Deployment surfaces and their redirect policy table.
//!
//! Every surface shares one resolver and differs only in the status code it
//! redirects with, what it answers when nothing can be resolved, and which
//! host the redirect points to.
//!
//! | Surface        | Found | Not found            | Malformed candidate | Destination        |
//! |----------------|-------|----------------------|---------------------|--------------------|
//! | `redirector`   | 303   | 404                  | 404                 | primary host       |
//! | `route`        | 303   | 404                  | 404                 | primary host       |
//! | `proxy`        | 308   | 301 to `/`           | 301 to `/`          | primary host       |
//! | `api`          | 308   | 404                  | 404                 | primary host       |
//! | `interceptor`  | 308   | fall through         | 307 to `/`          | primary or request |

use axum::http::StatusCode;
use std::fmt;
use std::str::FromStr;

/// One deployment flavour of the edge dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Path-based redirector that parses `/resource/<candidate>` itself.
    Redirector,
    /// Dedicated dynamic-segment route `/resource/{id}`.
    Route,
    /// Standalone redirecting proxy; everything unresolved goes to the site root.
    Proxy,
    /// API endpoint bound to the identifier subdomain.
    Api,
    /// Request-interception layer in front of the regular site.
    Interceptor,
}

/// Answer given when a request yields no redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Plain-text 404.
    NotFound,
    /// Redirect to the primary host root with the given status.
    RootRedirect(StatusCode),
    /// Hand the request to the wrapped site router unchanged.
    PassThrough,
}

/// Status codes used by one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectPolicy {
    /// Status of the redirect to the canonical slug URL.
    pub found: StatusCode,
    /// Answer when a well-formed candidate is not in the snapshot.
    pub missing: Fallback,
    /// Answer when no candidate can be extracted or it fails the shape check.
    pub malformed: Fallback,
}

impl Surface {
    pub const ALL: [Surface; 5] = [
        Surface::Redirector,
        Surface::Route,
        Surface::Proxy,
        Surface::Api,
        Surface::Interceptor,
    ];

    pub fn policy(self) -> RedirectPolicy {
        match self {
            Surface::Redirector | Surface::Route => RedirectPolicy {
                found: StatusCode::SEE_OTHER,
                missing: Fallback::NotFound,
                malformed: Fallback::NotFound,
            },
            Surface::Proxy => RedirectPolicy {
                found: StatusCode::PERMANENT_REDIRECT,
                missing: Fallback::RootRedirect(StatusCode::MOVED_PERMANENTLY),
                malformed: Fallback::RootRedirect(StatusCode::MOVED_PERMANENTLY),
            },
            Surface::Api => RedirectPolicy {
                found: StatusCode::PERMANENT_REDIRECT,
                missing: Fallback::NotFound,
                malformed: Fallback::NotFound,
            },
            Surface::Interceptor => RedirectPolicy {
                found: StatusCode::PERMANENT_REDIRECT,
                missing: Fallback::PassThrough,
                malformed: Fallback::RootRedirect(StatusCode::TEMPORARY_REDIRECT),
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Surface::Redirector => "redirector",
            Surface::Route => "route",
            Surface::Proxy => "proxy",
            Surface::Api => "api",
            Surface::Interceptor => "interceptor",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown surface '{0}', expected one of: redirector, route, proxy, api, interceptor")]
pub struct UnknownSurface(pub String);

impl FromStr for Surface {
    type Err = UnknownSurface;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Surface::ALL
            .into_iter()
            .find(|surface| surface.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSurface(s.to_string()))
    }
}
