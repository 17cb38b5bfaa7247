pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod routes;
pub mod service;
pub mod store;
pub mod test_util;
pub mod validation;

pub use config::Config;
pub use error::ApiError;
pub use service::UserService;
pub use store::UserStore;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsConfig;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// The user collection and its id sequence.
    pub users: UserService,
}

impl AppState {
    /// Build state from configuration, seeding the sample users if enabled.
    pub fn new(config: Config) -> Self {
        let store = if config.store.seed_sample_users {
            UserStore::with_sample_users()
        } else {
            UserStore::new()
        };

        Self {
            config,
            users: UserService::new(store),
        }
    }
}

/// Complete application router: routes nested under the configured context
/// path plus the panic, logging, CORS and trace layers.
pub fn app(state: Arc<AppState>) -> Router {
    let base_path = state.config.server.base_path.clone();
    let cors = cors_layer(&state.config.cors);
    let api = routes::router(state);

    let router = if base_path.is_empty() {
        api
    } else {
        Router::new().nest(&base_path, api)
    };

    router
        .layer(middleware::from_fn(error::catch_panic))
        .layer(middleware::from_fn(logging::request_logger))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match config.origin_list() {
        None => layer.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                        None
                    }
                })
                .collect();
            layer.allow_origin(origins)
        }
    }
}
