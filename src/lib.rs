//! # PID Resolver
//!
//! Resolves persistent identifiers (immutable UUIDs assigned to catalogue
//! entries) to their current slug and redirects to the canonical slug URL,
//! so external citations stay valid while slugs are renamed.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Catalogue entities, snapshots, surface policies
//! - **Application Layer** ([`application`]) - Refresh scheduling and resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Snapshot store and catalogue HTTP client
//! - **API Layer** ([`api`]) - Per-surface handlers, interception middleware, DTOs
//!
//! ## Caching
//!
//! Each instance owns one snapshot of the catalogue, fetched from
//! `https://<primary-host>/resources.json`:
//!
//! - Cold instance: the first request waits for the fetch
//! - Snapshot older than the freshness window (5 min): served as-is while a
//!   background refresh rebuilds it
//! - Failed fetch: previous snapshot kept
//!
//! Instances never share or coordinate caches.
//!
//! ## Surfaces
//!
//! One instance serves one [`domain::surface::Surface`]; see [`routes`] for
//! the route layout and [`domain::surface`] for the status-code policy table.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CacheState, PidResolver, RefreshScheduler};
    pub use crate::domain::decision::{RedirectDecision, Resolution};
    pub use crate::domain::entities::{CatalogRecord, Snapshot};
    pub use crate::domain::repositories::CatalogSource;
    pub use crate::domain::surface::Surface;
    pub use crate::error::{AppError, CatalogError};
    pub use crate::state::{AppState, Hosts};
}
