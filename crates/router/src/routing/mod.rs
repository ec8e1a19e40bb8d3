//! Host-based routing for merchant storefronts
//!
//! This module maps an incoming Host header to a tenant storefront and
//! rewrites the internally routed path, leaving the client-visible URL alone:
//! - Tenant hosts: acme.example.com/shoes -> /store/acme/shoes
//! - Reserved hosts: www.example.com, api.example.com -> untouched
//! - Apex and bare hosts: example.com, localhost -> untouched

mod bypass;
mod config;
mod dispatch;
mod host_resolver;
mod rewrite;

pub use bypass::BypassMatcher;
pub use config::{
    RoutingConfig, RoutingConfigError, DEFAULT_BYPASS_PREFIXES, DEFAULT_RESERVED_SUBDOMAINS, DEFAULT_STOREFRONT_ROOT,
};
pub use dispatch::{tenant_rewrite_middleware, with_tenant_routing, RoutableRequest, TenantRouter};
pub use host_resolver::{candidate_label, normalize_host, TenantResolver};
pub use rewrite::rewrite_path;
