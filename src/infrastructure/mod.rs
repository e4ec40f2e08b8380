//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Replica-local snapshot store
//! - [`catalog`] - HTTP client for the upstream resource catalogue

pub mod cache;
pub mod catalog;
