//! Storefront Shared Types
//!
//! Domain types shared between the storefront router and anything else that
//! needs to reason about tenant routing decisions.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
