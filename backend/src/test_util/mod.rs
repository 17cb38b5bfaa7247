use std::sync::Arc;

use crate::config::{Config, CorsConfig, LoggingConfig, ServerConfig, StoreConfig};
use crate::AppState;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_path: "/api".to_string(),
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        cors: CorsConfig {
            origins: "*".to_string(),
        },
        store: StoreConfig {
            seed_sample_users: true,
        },
    }
}

/// State holding the three sample users.
pub fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::new(test_config()))
}

/// State with an empty store.
pub fn create_empty_state() -> Arc<AppState> {
    let mut config = test_config();
    config.store.seed_sample_users = false;
    Arc::new(AppState::new(config))
}
