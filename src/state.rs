//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::PidResolver;
use crate::domain::surface::Surface;

/// Canonical hosts the service redirects between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hosts {
    /// Primary site host, the destination of every canonical redirect.
    pub primary: String,
    /// Identifier subdomain host.
    pub pid: String,
}

impl Hosts {
    /// Hosts are compared case-insensitively, so both are stored lowercased.
    pub fn new(primary: impl Into<String>, pid: impl Into<String>) -> Self {
        Self {
            primary: primary.into().to_ascii_lowercase(),
            pid: pid.into().to_ascii_lowercase(),
        }
    }
}

/// Application state shared across handlers.
///
/// Cloning is cheap; the resolver (and therefore the cache) is shared by
/// every request served by this instance and by nothing else.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<PidResolver>,
    pub hosts: Arc<Hosts>,
    pub surface: Surface,
}

impl AppState {
    pub fn new(resolver: Arc<PidResolver>, hosts: Hosts, surface: Surface) -> Self {
        Self {
            resolver,
            hosts: Arc::new(hosts),
            surface,
        }
    }
}
