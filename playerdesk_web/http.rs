use axum::{
    Router,
    extract::FromRef,
    routing::{delete, get},
};
use axum_extra::extract::cookie::Key;
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use playerdesk_app::{app_bus::AppBus, config::Config};
use playerdesk_types::errors::{AppError, ApplicationError};

use crate::handlers::{delete_player, edit_player, home, list_players, update_player};

const ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
    pub cookie_key: Key,
}

impl AppState {
    /// Builds the shared state and switches the UI to the configured locale.
    pub fn new(app_bus: Arc<AppBus>, config: &Config) -> Result<AppState, ApplicationError> {
        let cookie_key = Key::try_from(config.cookie_secret.as_bytes())
            .map_err(|e| AppError::InvalidConfig(format!("cookie secret: {e}")))?;
        rust_i18n::set_locale(&config.locale);

        Ok(AppState {
            app_bus,
            cookie_key,
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .nest_service("/assets", ServeDir::new(ASSETS_DIR))
            .route("/", get(home))
            .route("/players", get(list_players))
            .route("/player/{id}", get(edit_player).post(update_player))
            .route(
                "/players/{id}/delete",
                delete(delete_player).post(delete_player),
            )
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        Self::serve_with_listener(state, listener).await
    }

    pub async fn serve_with_listener(
        state: AppState,
        listener: TcpListener,
    ) -> Result<(), ApplicationError> {
        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
