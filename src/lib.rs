pub mod adapters;
pub mod config;
pub mod domain;
pub mod infra;
pub mod services;

use {
    adapters::paylike::GatewayAdapter, config::GatewayConfig, domain::ports::OrderStore,
    services::webhook_processor::WebhookProcessor, std::sync::Arc,
};

#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    pub gateway: Arc<GatewayAdapter>,
    pub orders: Arc<dyn OrderStore>,
    pub processor: Arc<WebhookProcessor>,
}
