use std::sync::Arc;

use playerdesk_app::{app_bus::AppBus, config::Config};
use playerdesk_remote::HttpPlayerRepository;
use playerdesk_types::errors::ApplicationError;
use playerdesk_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            return Err(e);
        }
    };

    let players = Arc::new(HttpPlayerRepository::new(&config.api_base_url)?);
    tracing::info!("Proxying players API at {}", config.api_base_url);

    let app_bus = Arc::new(AppBus::new(config.clone(), players));
    let state = AppState::new(app_bus, &config)?;

    WebRouter::serve(state, config.port).await
}
