//! Client-side services: gateway, form handling, filtering and session state

pub mod auth;
pub mod cache;
pub mod filter;
pub mod forms;
pub mod gateway;
pub mod session;

use std::sync::Arc;

use crate::{config::AppConfig, error::AppResult};

use self::{
    auth::{AuthProvider, PlaceholderCredentials},
    cache::CatalogCache,
    forms::FormController,
    gateway::{AppsScriptGateway, DataGateway},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub gateway: Arc<dyn DataGateway>,
    pub auth: Arc<dyn AuthProvider>,
    pub forms: FormController,
    pub cache: CatalogCache,
}

impl Services {
    /// Create all services against the configured Apps Script endpoint
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let gateway = AppsScriptGateway::new(&config.gateway)?;
        tracing::info!("Using data endpoint {}", gateway.endpoint());
        Ok(Self::with_gateway(
            Arc::new(gateway),
            Arc::new(PlaceholderCredentials::new(&config.admin)),
        ))
    }

    /// Wire services around an existing gateway and auth provider
    pub fn with_gateway(gateway: Arc<dyn DataGateway>, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            forms: FormController::new(gateway.clone()),
            gateway,
            auth,
            cache: CatalogCache::new(),
        }
    }
}
