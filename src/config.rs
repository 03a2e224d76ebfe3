//! Configuration management for the Pustaka portal

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Placeholder endpoint shipped with the portal; replace it with the deployed
/// Apps Script web app URL.
pub const DEFAULT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbz_GANTI_DENGAN_URL_ANDA/exec";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Remote spreadsheet endpoint settings
#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

/// Admin credential pair compared by the placeholder auth provider.
///
/// These values are not a security boundary: anyone who can read the
/// configuration can log in.
#[derive(Debug, Deserialize, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // PUSTAKA_GATEWAY__TIMEOUT_SECS=10 -> gateway.timeout_secs
            .add_source(
                Environment::with_prefix("PUSTAKA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("gateway.endpoint", env::var("APPS_SCRIPT_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
