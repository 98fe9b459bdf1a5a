use super::error::ConfigError;
use super::{AppConfig, BASE_URL_ENV, CONFIG_PATH, DEFAULT_BASE_URL, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;
use tracing::debug;
use url::Url;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub date_header: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration.
///
/// An explicit `path` must exist. Without one, a missing default file means
/// built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    let parsed = match path {
        Some(path) => read_config(path)?,
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { path }) => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                RawConfig::default()
            }
            other => other?,
        },
    };
    validate_and_build(parsed, env::var(BASE_URL_ENV).ok())
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn validate_and_build(
    parsed: RawConfig,
    env_base_url: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let base_url = env_base_url
        .filter(|url| !url.trim().is_empty())
        .or(parsed.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let request_timeout = match parsed.request_timeout_secs {
        Some(0) => return Err(ConfigError::ZeroTimeout),
        Some(secs) => Some(Duration::from_secs(secs)),
        None => None,
    };

    Ok(AppConfig {
        base_url: validate_base_url(&base_url)?,
        request_timeout,
        date_header: parsed.date_header,
        log_file: parsed.log_file,
    })
}

/// Check that `url` is an absolute http(s) URL; returns it without a trailing slash
pub fn validate_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim();
    let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            url: trimmed.to_string(),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
