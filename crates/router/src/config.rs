//! Application configuration

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use crate::routing::{
    RoutingConfig, DEFAULT_BYPASS_PREFIXES, DEFAULT_RESERVED_SUBDOMAINS, DEFAULT_STOREFRONT_ROOT,
};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::Invalid("LOG_FORMAT", "expected 'pretty' or 'json'")),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: SocketAddr,
    pub log_format: LogFormat,

    // Tenant routing
    pub routing: Arc<RoutingConfig>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress)?;

        let log_format = match env::var("LOG_FORMAT") {
            Ok(value) => value.parse()?,
            Err(_) => LogFormat::default(),
        };

        let root_domain = env::var("ROOT_DOMAIN").unwrap_or_else(|_| "localhost".to_string());
        if root_domain.trim().is_empty() {
            return Err(ConfigError::Invalid("ROOT_DOMAIN", "must not be empty"));
        }

        let reserved = match env::var("RESERVED_SUBDOMAINS") {
            Ok(value) => split_list(&value),
            Err(_) => to_owned_list(DEFAULT_RESERVED_SUBDOMAINS),
        };

        let storefront_root = env::var("STOREFRONT_ROOT")
            .unwrap_or_else(|_| DEFAULT_STOREFRONT_ROOT.to_string());

        let bypass_prefixes = match env::var("BYPASS_PATH_PREFIXES") {
            Ok(value) => split_list(&value),
            Err(_) => to_owned_list(DEFAULT_BYPASS_PREFIXES),
        };
        if bypass_prefixes.iter().any(|p| !p.starts_with('/')) {
            return Err(ConfigError::Invalid(
                "BYPASS_PATH_PREFIXES",
                "every prefix must start with '/'",
            ));
        }

        let routing = RoutingConfig::new(root_domain)
            .with_reserved(reserved)
            .with_storefront_root(&storefront_root)
            .map_err(|_| {
                ConfigError::Invalid(
                    "STOREFRONT_ROOT",
                    "segments may only contain letters, digits, '-' and '_'",
                )
            })?
            .with_bypass_prefixes(bypass_prefixes);

        Ok(Self {
            bind_address,
            log_format,
            routing: Arc::new(routing),
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),
    #[error("BIND_ADDRESS must be a socket address like 0.0.0.0:3000")]
    InvalidBindAddress,
}
