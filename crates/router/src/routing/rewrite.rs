//! Tenant path composition

use storefront_shared::TenantId;

/// Internal route for a tenant request
///
/// `/` maps to `/<root>/<tenant>`; any other path is appended after it.
/// The query string is not part of `original_path` and is re-attached by
/// the caller.
pub fn rewrite_path(storefront_root: &str, tenant: &TenantId, original_path: &str) -> String {
    let mut path = format!("/{}/{}", storefront_root, tenant);

    if !original_path.is_empty() && original_path != "/" {
        if !original_path.starts_with('/') {
            path.push('/');
        }
        path.push_str(original_path);
    }

    path
}
