//! HTTP layer translating requests into resolutions.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for JSON responses
//! - [`handlers`] - Per-surface HTTP request handlers
//! - [`middleware`] - Request interception and tracing middleware
//! - [`dispatch`] - Decision flow shared by the self-answering surfaces
//! - [`response`] - Redirect and fallback response builders

pub mod dispatch;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
