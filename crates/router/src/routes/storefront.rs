//! Storefront entry points
//!
//! These are the routes tenant hosts are rewritten onto. Rendering the
//! storefront itself lives elsewhere; the handlers report what the router
//! resolved so the frontend can pick the right merchant.

use axum::{
    extract::{OriginalUri, Path},
    http::Uri,
    Extension, Json,
};
use serde::Serialize;
use storefront_shared::{RouteDecision, TenantId};

use crate::error::ApiResult;

#[derive(Debug, Serialize)]
pub struct StorefrontResponse {
    pub tenant: TenantId,
    /// Path the request was served from
    pub internal_path: String,
    /// URL as the client requested it
    pub visible_url: String,
    /// True when the tenant came from the Host header rather than the path
    pub host_routed: bool,
}

/// `/<root>/:tenant`
pub async fn storefront_index(
    Path(tenant): Path<String>,
    uri: Uri,
    OriginalUri(original): OriginalUri,
    decision: Option<Extension<RouteDecision>>,
) -> ApiResult<Json<StorefrontResponse>> {
    storefront_response(&tenant, &uri, &original, decision)
}

/// `/<root>/:tenant/*path`
pub async fn storefront_page(
    Path((tenant, _path)): Path<(String, String)>,
    uri: Uri,
    OriginalUri(original): OriginalUri,
    decision: Option<Extension<RouteDecision>>,
) -> ApiResult<Json<StorefrontResponse>> {
    storefront_response(&tenant, &uri, &original, decision)
}

fn storefront_response(
    tenant: &str,
    uri: &Uri,
    original: &Uri,
    decision: Option<Extension<RouteDecision>>,
) -> ApiResult<Json<StorefrontResponse>> {
    let tenant = TenantId::parse(tenant)?;
    let host_routed = decision.is_some_and(|Extension(d)| d.is_rewritten());

    Ok(Json(StorefrontResponse {
        tenant,
        internal_path: uri.path().to_string(),
        visible_url: original.to_string(),
        host_routed,
    }))
}
