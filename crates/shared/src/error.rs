//! Error types for shared storefront types

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SharedError {
    #[error("Tenant identifier is empty")]
    EmptyTenant,

    #[error("Tenant identifier too long: {0} bytes (max 63)")]
    TenantTooLong(usize),

    #[error("Invalid character {1:?} in tenant identifier: {0}")]
    InvalidTenantChar(String, char),
}
