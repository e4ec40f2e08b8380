//! Domain layer containing resolution entities and policies.
//!
//! Nothing here performs I/O. The upstream catalogue is reached through the
//! [`repositories::CatalogSource`] trait, implemented by the infrastructure
//! layer.
//!
//! # Architecture
//!
//! - [`entities`] - Catalogue records and immutable snapshots
//! - [`repositories`] - Catalogue source trait
//! - [`identifier`] - Candidate extraction and identifier shape check
//! - [`surface`] - Per-surface status/host policy table
//! - [`decision`] - Resolution outcomes and redirect composition

pub mod decision;
pub mod entities;
pub mod identifier;
pub mod repositories;
pub mod surface;
