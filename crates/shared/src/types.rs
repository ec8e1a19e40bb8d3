//! Common types used across the storefront platform

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SharedError;

/// Longest DNS label, and therefore the longest tenant identifier
pub const MAX_TENANT_LEN: usize = 63;

// =============================================================================
// Tenant Identifier
// =============================================================================

/// Tenant (merchant storefront) identifier, taken from the leftmost host label
///
/// Always lowercase, non-empty and made of characters that are safe to splice
/// into a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantId(String);

impl TenantId {
    /// Validate and build a tenant identifier. Input is lowercased first.
    pub fn parse(label: &str) -> Result<Self, SharedError> {
        let label = label.to_ascii_lowercase();

        if label.is_empty() {
            return Err(SharedError::EmptyTenant);
        }
        if label.len() > MAX_TENANT_LEN {
            return Err(SharedError::TenantTooLong(label.len()));
        }
        if let Some(bad) = label
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(SharedError::InvalidTenantChar(label, bad));
        }

        Ok(Self(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TenantId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TenantId {
    type Error = SharedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TenantId> for String {
    fn from(id: TenantId) -> Self {
        id.0
    }
}

// =============================================================================
// Routing Decision
// =============================================================================

/// Outcome of host-based routing for a single request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RouteDecision {
    /// Not a tenant request; forwarded untouched
    PassThrough,
    /// Internally routed to the tenant's storefront path
    Rewritten { tenant: TenantId, path: String },
}

impl RouteDecision {
    pub fn is_rewritten(&self) -> bool {
        matches!(self, RouteDecision::Rewritten { .. })
    }

    /// The tenant this request was routed to, if any
    pub fn tenant(&self) -> Option<&TenantId> {
        match self {
            RouteDecision::PassThrough => None,
            RouteDecision::Rewritten { tenant, .. } => Some(tenant),
        }
    }
}
