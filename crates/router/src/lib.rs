//! Storefront Router Library
//!
//! Host-based routing for the storefront platform: requests to
//! `<tenant>.<root-domain>` are served from the tenant's storefront routes
//! while the client keeps seeing its original URL.

pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routing::{RoutingConfig, TenantResolver, TenantRouter};
pub use state::AppState;
