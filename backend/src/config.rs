//! Configuration for the User API.

use config::builder::DefaultState;
use config::{Config as ConfigLoader, ConfigBuilder, Environment, File};
use serde::Deserialize;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Context path every route is nested under. Empty mounts at the root.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_path: default_base_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json".
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or "*".
    #[serde(default = "default_cors_origins")]
    pub origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: default_cors_origins(),
        }
    }
}

impl CorsConfig {
    /// Explicit origin list, or `None` when any origin is allowed.
    pub fn origin_list(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            None
        } else {
            Some(origins)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Populate the store with johndoe, janedoe and bobsmith at startup.
    #[serde(default = "default_true")]
    pub seed_sample_users: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_sample_users: default_true(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid base path: {0:?}")]
    InvalidBasePath(String),
    #[error("Invalid log format: {0:?} (expected \"pretty\" or \"json\")")]
    InvalidLogFormat(String),
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_base_path() -> String {
    "/api".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "pretty".to_string()
}
fn default_cors_origins() -> String {
    "*".to_string()
}
fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (USER_API__SECTION__KEY format)
    /// 2. config.toml file (if present)
    /// 3. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("USER_API")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_sources(builder)
    }

    fn from_sources(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let mut config: Config = builder.build()?.try_deserialize()?;
        config.server.base_path = normalize_base_path(&config.server.base_path)?;

        if !matches!(config.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidLogFormat(config.logging.format));
        }

        Ok(config)
    }
}

/// Canonical form of a context path: leading slash, no trailing slash,
/// and "" for the root.
pub fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_matches('/');

    if trimmed
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, ':' | '*' | '?' | '#' | '{' | '}'))
    {
        return Err(ConfigError::InvalidBasePath(raw.to_string()));
    }

    if trimmed.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("/{}", trimmed))
    }
}
