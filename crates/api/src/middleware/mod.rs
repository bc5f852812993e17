//! HTTP middleware.

pub mod auth;
pub mod logging;
pub mod rate_limit;

pub use auth::{require_admin, AdminAuth};
pub use rate_limit::{rate_limit_middleware, RateLimiterState};
