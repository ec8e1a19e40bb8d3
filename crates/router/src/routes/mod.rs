//! HTTP routes

pub mod health;
pub mod storefront;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{error::ApiError, routing::with_tenant_routing, state::AppState};

/// Create the route tree that tenant requests are rewritten onto
pub fn create_router(state: AppState) -> Router {
    let root = state.tenant_router.config().storefront_root().to_string();

    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness));

    let storefront_routes = Router::new()
        .route(&format!("/{}/:tenant", root), get(storefront::storefront_index))
        .route(
            &format!("/{}/:tenant/*path", root),
            get(storefront::storefront_page),
        );

    Router::new()
        .merge(health_routes)
        .merge(storefront_routes)
        .fallback(not_found)
        .with_state(state)
}

/// Create the full application: tenant rewriting in front of the routes
pub fn create_app(state: AppState) -> Router {
    let tenant_router = state.tenant_router.clone();

    with_tenant_routing(create_router(state), tenant_router).layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
