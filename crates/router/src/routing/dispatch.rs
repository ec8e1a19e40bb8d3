//! Request dispatch for tenant storefronts
//!
//! `TenantRouter` makes the PASS_THROUGH / REWRITTEN decision for a request
//! and applies it. The decision only touches the internally routed URI; the
//! client-visible URL is kept as `OriginalUri` for handlers.

use std::fmt::Display;
use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Request, State},
    http::{self, header, uri::PathAndQuery, Uri},
    middleware::{self, Next},
    response::Response,
    Router,
};
use storefront_shared::RouteDecision;

use super::{rewrite_path, BypassMatcher, RoutingConfig, TenantResolver};

/// Minimal view of an inbound request needed for tenant routing
pub trait RoutableRequest {
    type RewriteError: Display;

    /// Request host, possibly with a port
    fn host(&self) -> Option<&str>;

    /// Request path without query string
    fn path(&self) -> &str;

    /// Route the request internally to `path` without changing what the
    /// client sees
    fn rewrite_to(&mut self, path: &str) -> Result<(), Self::RewriteError>;
}

impl<B> RoutableRequest for http::Request<B> {
    type RewriteError = http::Error;

    /// The request-target authority wins over the `Host` header (RFC 9112
    /// §3.2.2); origin-form requests only have the header.
    fn host(&self) -> Option<&str> {
        self.uri().host().or_else(|| {
            self.headers()
                .get(header::HOST)
                .and_then(|value| value.to_str().ok())
        })
    }

    fn path(&self) -> &str {
        self.uri().path()
    }

    fn rewrite_to(&mut self, path: &str) -> Result<(), Self::RewriteError> {
        let original = self.uri().clone();

        let path_and_query: PathAndQuery = match original.query() {
            Some(query) => format!("{}?{}", path, query).parse()?,
            None => path.parse()?,
        };
        let mut parts = original.clone().into_parts();
        parts.path_and_query = Some(path_and_query);
        let rewritten = Uri::from_parts(parts)?;

        if self.extensions().get::<OriginalUri>().is_none() {
            self.extensions_mut().insert(OriginalUri(original));
        }
        *self.uri_mut() = rewritten;

        Ok(())
    }
}

/// Tenant dispatcher: bypass check, host resolution, then path rewrite
#[derive(Debug, Clone)]
pub struct TenantRouter {
    config: Arc<RoutingConfig>,
    resolver: TenantResolver,
    bypass: BypassMatcher,
}

impl TenantRouter {
    pub fn new(config: Arc<RoutingConfig>) -> Self {
        Self {
            resolver: TenantResolver::new(config.clone()),
            bypass: BypassMatcher::new(config.bypass_prefixes()),
            config,
        }
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Decide how a request should be routed without modifying it
    pub fn decide<R: RoutableRequest + ?Sized>(&self, request: &R) -> RouteDecision {
        // Cheapest rejection first
        if self.bypass.is_bypassed(request.path()) {
            return RouteDecision::PassThrough;
        }

        let Some(tenant) = self.resolver.resolve_host(request.host()) else {
            return RouteDecision::PassThrough;
        };

        let path = rewrite_path(self.config.storefront_root(), &tenant, request.path());
        RouteDecision::Rewritten { tenant, path }
    }

    /// Decide and apply the decision to the request
    ///
    /// A rewrite that cannot be applied degrades to pass-through.
    pub fn route<R: RoutableRequest + ?Sized>(&self, request: &mut R) -> RouteDecision {
        let decision = self.decide(request);

        if let RouteDecision::Rewritten { tenant, path } = &decision {
            if let Err(e) = request.rewrite_to(path) {
                tracing::warn!(
                    tenant = %tenant,
                    path = %path,
                    error = %e,
                    "Failed to rewrite storefront request, passing through"
                );
                return RouteDecision::PassThrough;
            }
        }

        decision
    }
}

/// Middleware that rewrites tenant requests to their storefront routes
///
/// Must wrap the whole application (see [`with_tenant_routing`]); a layer
/// added with `Router::layer` runs after route matching and cannot change it.
pub async fn tenant_rewrite_middleware(
    State(router): State<TenantRouter>,
    mut request: Request,
    next: Next,
) -> Response {
    let decision = router.route(&mut request);

    match &decision {
        RouteDecision::Rewritten { tenant, path } => {
            tracing::debug!(tenant = %tenant, path = %path, "Routed request to storefront");
        }
        RouteDecision::PassThrough => {
            tracing::trace!(path = %request.uri().path(), "Request passed through");
        }
    }

    request.extensions_mut().insert(decision);
    next.run(request).await
}

/// Wrap an application so tenant rewriting happens before its routing
pub fn with_tenant_routing(app: Router, router: TenantRouter) -> Router {
    Router::new()
        .fallback_service(app)
        .layer(middleware::from_fn_with_state(
            router,
            tenant_rewrite_middleware,
        ))
}
