//! HTTP request handlers, one per deployment surface.

pub mod health;
pub mod pid_api;
pub mod proxy;
pub mod redirect;

pub use health::health_handler;
pub use pid_api::pid_api_handler;
pub use proxy::proxy_handler;
pub use redirect::{redirect_handler, route_handler};
