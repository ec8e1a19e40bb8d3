//! Host-to-Tenant Resolution
//!
//! Resolves incoming Host headers (or full URLs) to tenant identifiers.
//! - Tenant hosts: acme.example.com -> acme
//! - Reserved hosts: www.example.com -> none
//! - Apex and bare hosts: example.com, localhost -> none
//!
//! Resolution is pure and total: every failure is folded into `None`.

use std::net::Ipv4Addr;
use std::sync::Arc;

use storefront_shared::TenantId;
use url::{Host, Url};

use super::RoutingConfig;

/// Host resolver backed by an immutable routing config
#[derive(Debug, Clone)]
pub struct TenantResolver {
    config: Arc<RoutingConfig>,
}

impl TenantResolver {
    pub fn new(config: Arc<RoutingConfig>) -> Self {
        Self { config }
    }

    /// Resolve a Host header value (port allowed) to a tenant
    ///
    /// Returns `None` for a missing host, hosts with two or fewer labels,
    /// IP literals and reserved subdomains.
    pub fn resolve_host(&self, host: Option<&str>) -> Option<TenantId> {
        let host = normalize_host(host?);
        let candidate = candidate_label(&host)?;
        self.filter_reserved(candidate)
    }

    /// Resolve a full URL to a tenant. Unparseable URLs resolve to `None`.
    pub fn resolve_url(&self, url: &str) -> Option<TenantId> {
        let url = Url::parse(url).ok()?;
        let domain = match url.host()? {
            Host::Domain(domain) => domain.trim_end_matches('.').to_ascii_lowercase(),
            Host::Ipv4(_) | Host::Ipv6(_) => return None,
        };
        let candidate = candidate_label(&domain)?;
        self.filter_reserved(candidate)
    }

    /// Drop reserved names; pass every other label through
    ///
    /// Labels are ASCII-lowercased before the deny-list check, since host
    /// names are case-insensitive: `"WWW"` is reserved and `"Shop1"` comes
    /// back as `shop1`.
    pub fn filter_reserved(&self, candidate: &str) -> Option<TenantId> {
        let candidate = candidate.to_ascii_lowercase();
        if self.config.is_reserved(&candidate) {
            return None;
        }
        TenantId::parse(&candidate).ok()
    }
}

/// Normalize a host header value
pub fn normalize_host(host: &str) -> String {
    // Remove port if present
    let host = host.split(':').next().unwrap_or(host);
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// Leftmost label of a normalized host, if the host has more than two labels
pub fn candidate_label(host: &str) -> Option<&str> {
    if host.is_empty() || host.parse::<Ipv4Addr>().is_ok() {
        return None;
    }

    let mut labels = host.split('.');
    let first = labels.next()?;
    if labels.count() < 2 {
        return None;
    }

    Some(first).filter(|label| !label.is_empty())
}
