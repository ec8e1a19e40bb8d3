//! Immutable routing configuration
//!
//! Built once at startup and shared behind an `Arc`; nothing mutates it
//! afterwards.

use std::collections::HashSet;

/// Subdomains that never resolve to a tenant unless overridden
pub const DEFAULT_RESERVED_SUBDOMAINS: &[&str] = &["www", "api", "prod"];

/// Path segment that tenant storefront routes are registered under
pub const DEFAULT_STOREFRONT_ROOT: &str = "store";

/// Path prefixes that skip tenant routing entirely
pub const DEFAULT_BYPASS_PREFIXES: &[&str] = &["/api", "/_next", "/static", "/favicon.ico"];

#[derive(Debug, Clone)]
pub struct RoutingConfig {
    root_domain: String,
    reserved: HashSet<String>,
    storefront_root: String,
    bypass_prefixes: Vec<String>,
}

impl RoutingConfig {
    /// Create a config for the given apex domain with default reserved names,
    /// storefront root and bypass prefixes
    pub fn new(root_domain: impl Into<String>) -> Self {
        let root_domain: String = root_domain.into();
        let root_domain = root_domain
            .split(':')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches('.')
            .to_ascii_lowercase();

        Self {
            root_domain,
            reserved: DEFAULT_RESERVED_SUBDOMAINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            storefront_root: DEFAULT_STOREFRONT_ROOT.to_string(),
            bypass_prefixes: DEFAULT_BYPASS_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the reserved subdomain deny-list
    pub fn with_reserved<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reserved = names
            .into_iter()
            .map(|s| s.as_ref().trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// Set the storefront root (surrounding slashes are dropped)
    ///
    /// Every `/`-separated segment must be non-empty and made of ASCII
    /// letters, digits, `-` or `_`, so the root is both a valid URI path and
    /// a literal axum route.
    pub fn with_storefront_root(mut self, root: &str) -> Result<Self, RoutingConfigError> {
        let root = root.trim().trim_matches('/');
        let valid = !root.is_empty()
            && root.split('/').all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            });
        if !valid {
            return Err(RoutingConfigError::InvalidStorefrontRoot(root.to_string()));
        }

        self.storefront_root = root.to_string();
        Ok(self)
    }

    /// Replace the bypass path prefixes
    pub fn with_bypass_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bypass_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    pub fn storefront_root(&self) -> &str {
        &self.storefront_root
    }

    pub fn bypass_prefixes(&self) -> &[String] {
        &self.bypass_prefixes
    }

    /// The platform's own brand label (first label of the root domain)
    pub fn brand_label(&self) -> Option<&str> {
        self.root_domain.split('.').next().filter(|l| !l.is_empty())
    }

    /// Whether a lowercase label is on the deny-list
    pub fn is_reserved(&self, label: &str) -> bool {
        self.reserved.contains(label) || self.brand_label() == Some(label)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RoutingConfigError {
    #[error("Invalid storefront root: {0:?}")]
    InvalidStorefrontRoot(String),
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self::new("localhost")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoutingConfig::new("example.com");
        assert_eq!(config.root_domain(), "example.com");
        assert_eq!(config.storefront_root(), "store");
        assert!(config.is_reserved("www"));
        assert!(config.is_reserved("api"));
        assert!(config.is_reserved("prod"));
        assert!(!config.is_reserved("acme"));
        assert_eq!(config.bypass_prefixes().len(), 4);
    }

    #[test]
    fn test_root_domain_is_normalized() {
        assert_eq!(
            RoutingConfig::new("Example.COM.:443").root_domain(),
            "example.com"
        );
    }

    #[test]
    fn test_brand_label_is_reserved() {
        let config = RoutingConfig::new("acme.io");
        assert_eq!(config.brand_label(), Some("acme"));
        assert!(config.is_reserved("acme"));
        assert!(!config.is_reserved("io"));
    }

    #[test]
    fn test_custom_reserved_replaces_defaults() {
        let config = RoutingConfig::new("example.com").with_reserved([" Admin ", "", "status"]);
        assert!(config.is_reserved("admin"));
        assert!(config.is_reserved("status"));
        assert!(!config.is_reserved("www"));
        assert!(!config.is_reserved(""));
    }

    #[test]
    fn test_storefront_root_slashes_trimmed() {
        let config = RoutingConfig::new("example.com")
            .with_storefront_root("/shops/")
            .unwrap();
        assert_eq!(config.storefront_root(), "shops");

        let config = RoutingConfig::new("example.com")
            .with_storefront_root("shops/v2")
            .unwrap();
        assert_eq!(config.storefront_root(), "shops/v2");
    }

    #[test]
    fn test_storefront_root_rejects_unsafe_segments() {
        for root in ["", "/", "shop front", "*all", ":tenant", "a//b", "s?x", "s#x", "s%20"] {
            assert!(
                matches!(
                    RoutingConfig::new("example.com").with_storefront_root(root),
                    Err(RoutingConfigError::InvalidStorefrontRoot(_))
                ),
                "{root:?} should be rejected"
            );
        }
    }
}
