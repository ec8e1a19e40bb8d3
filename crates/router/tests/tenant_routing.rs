//! End-to-end tests for host-based storefront routing
//!
//! Each test drives the full application (tenant rewrite in front of the
//! route tree) with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use storefront_router::{config::LogFormat, routes::create_app, AppState, Config, RoutingConfig};
use tower::ServiceExt;

// ============================================================================
// Test Utilities
// ============================================================================

fn app_with(routing: RoutingConfig) -> Router {
    let config = Config {
        bind_address: "127.0.0.1:0".parse().unwrap(),
        log_format: LogFormat::Pretty,
        routing: Arc::new(routing),
    };
    create_app(AppState::new(config))
}

fn app() -> Router {
    app_with(RoutingConfig::new("example.com"))
}

async fn get(app: Router, host: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::HOST, host)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// ============================================================================
// Rewritten requests
// ============================================================================

#[tokio::test]
async fn tenant_root_is_served_from_storefront_index() {
    let (status, body) = get(app(), "shop1.example.com", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenant"], "shop1");
    assert_eq!(body["internal_path"], "/store/shop1");
    assert_eq!(body["visible_url"], "/");
    assert_eq!(body["host_routed"], true);
}

#[tokio::test]
async fn tenant_page_keeps_visible_url_and_ignores_port() {
    let (status, body) = get(app(), "shop1.example.com:8080", "/cart").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenant"], "shop1");
    assert_eq!(body["internal_path"], "/store/shop1/cart");
    assert_eq!(body["visible_url"], "/cart");
}

#[tokio::test]
async fn query_string_survives_rewrite() {
    let (status, body) = get(app(), "acme.example.com", "/shoes?size=42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["internal_path"], "/store/acme/shoes");
    assert_eq!(body["visible_url"], "/shoes?size=42");
}

#[tokio::test]
async fn custom_storefront_root_is_honoured() {
    let routing = RoutingConfig::new("example.com")
        .with_storefront_root("shops")
        .unwrap();
    let (status, body) = get(app_with(routing), "acme.example.com", "/shoes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["internal_path"], "/shops/acme/shoes");
}

// ============================================================================
// Pass-through requests
// ============================================================================

#[tokio::test]
async fn reserved_subdomain_passes_through() {
    // No route is registered at /pricing, so pass-through lands on the fallback
    let (status, body) = get(app(), "www.example.com", "/pricing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn apex_domain_passes_through() {
    let (status, body) = get(app(), "example.com", "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["root_domain"], "example.com");
}

#[tokio::test]
async fn bypassed_prefixes_ignore_tenant_host() {
    for uri in ["/api/anything", "/favicon.ico", "/_next/static/app.js"] {
        let (status, _) = get(app(), "acme.example.com", uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri} should not be rewritten");
    }
}

#[tokio::test]
async fn direct_storefront_hit_is_not_host_routed() {
    let (status, body) = get(app(), "example.com", "/store/acme/shoes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenant"], "acme");
    assert_eq!(body["host_routed"], false);
}

#[tokio::test]
async fn invalid_tenant_in_direct_hit_is_rejected() {
    let (status, body) = get(app(), "example.com", "/store/bad%20name").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}
