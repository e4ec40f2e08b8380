//! HTTP middleware for request processing.
//!
//! Provides identifier interception and observability middleware.

pub mod intercept;
pub mod tracing;
