use super::services;
use crate::adapters::local::{StaticKalturaConfig, StaticTokenAuthenticator};
use crate::application::ServicesService;
use crate::config::ServerConfig;
use crate::ports::{Authenticator, KalturaConfigSource};
use axum::{routing::get, Router};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServicesService>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(
        kaltura: Arc<dyn KalturaConfigSource>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            services: Arc::new(ServicesService::new(kaltura)),
            authenticator,
        }
    }

    /// Wire the local adapters from configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            Arc::new(StaticKalturaConfig::new(config.kaltura.clone())),
            Arc::new(StaticTokenAuthenticator::new(
                config.access_tokens.iter().cloned(),
            )),
        )
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/services/kaltura",
            get(services::show_kaltura_config),
        )
        .with_state(state)
}
