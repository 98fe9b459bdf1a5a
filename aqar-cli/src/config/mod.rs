pub mod error;
pub mod loader;

use aqar_core::constants::DEFAULT_DATE_HEADER;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file path - can be overridden via CLI argument
pub const CONFIG_PATH: &str = "config/client.toml";

/// Environment file loaded once at startup
pub const ENV_PATH: &str = "config/.env";

/// Environment variable overriding `base_url`
pub const BASE_URL_ENV: &str = "AQAR_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub use error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub request_timeout: Option<Duration>,
    pub date_header: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            date_header: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        loader::load_config(path)
    }

    /// Replace the base URL, validating it the same way the file value is
    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.base_url = loader::validate_base_url(url)?;
        Ok(self)
    }

    /// Transcript header, falling back to the built-in one
    pub fn date_header(&self) -> String {
        self.date_header
            .clone()
            .unwrap_or_else(|| DEFAULT_DATE_HEADER.to_string())
    }
}
