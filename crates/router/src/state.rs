//! Shared application state

use std::sync::Arc;

use crate::{routing::TenantRouter, Config};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tenant_router: TenantRouter,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let tenant_router = TenantRouter::new(config.routing.clone());
        Self {
            config: Arc::new(config),
            tenant_router,
        }
    }
}
