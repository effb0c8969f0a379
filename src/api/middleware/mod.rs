//! API middleware components

pub mod metrics;
pub mod user_auth;

pub use metrics::metrics_middleware;
pub use user_auth::{OptionalUser, RequireUser};
