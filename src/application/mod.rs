//! Application layer containing resolution logic.
//!
//! - [`services::RefreshScheduler`] - Freshness policy for the snapshot cache
//! - [`services::PidResolver`] - Identifier lookups on top of the scheduler

pub mod services;
