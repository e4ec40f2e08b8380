//! Application services orchestrating the cache and the catalogue source.

pub mod refresh_scheduler;
pub mod resolver;

pub use refresh_scheduler::{CacheState, DEFAULT_FRESHNESS_WINDOW, RefreshReport, RefreshScheduler};
pub use resolver::PidResolver;
