// Config loading tests - testing AppConfig::load and its validation errors

use aqar_cli::config::{AppConfig, BASE_URL_ENV, ConfigError, DEFAULT_BASE_URL};
use aqar_core::constants::DEFAULT_DATE_HEADER;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("client.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

fn clear_env() {
    // SAFETY: env-mutating tests are serialized
    unsafe { std::env::remove_var(BASE_URL_ENV) };
}

#[test]
#[serial]
fn parses_full_config() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
base_url = "http://aqar.local:8000/"
request_timeout_secs = 30
date_header = "Today"
log_file = "aqar.log"
"#,
    );

    let config = AppConfig::load(Some(&path)).expect("load config");

    assert_eq!(config.base_url, "http://aqar.local:8000");
    assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    assert_eq!(config.date_header(), "Today");
    assert_eq!(config.log_file, Some(PathBuf::from("aqar.log")));
}

#[test]
#[serial]
fn empty_file_uses_defaults() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "");

    let config = AppConfig::load(Some(&path)).expect("load config");

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.date_header(), DEFAULT_DATE_HEADER);
}

#[test]
fn returns_error_when_file_not_found() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/client.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn returns_error_on_unknown_key() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "base_uri = \"http://typo\"\n");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn returns_error_on_invalid_toml() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "base_url = \n");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
#[serial]
fn returns_error_on_zero_timeout() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "request_timeout_secs = 0\n");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::ZeroTimeout)));
}

#[test]
#[serial]
fn returns_error_on_unsupported_scheme() {
    clear_env();
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "base_url = \"ws://aqar.local\"\n");

    let result = AppConfig::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::UnsupportedScheme { .. })));
}

#[test]
#[serial]
fn env_var_overrides_file_base_url() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "base_url = \"http://file.local\"\n");

    // SAFETY: env-mutating tests are serialized
    unsafe { std::env::set_var(BASE_URL_ENV, "https://env.local/") };
    let result = AppConfig::load(Some(&path));
    clear_env();

    assert_eq!(result.expect("load config").base_url, "https://env.local");
}

#[test]
fn cli_base_url_override_is_validated() {
    let config = AppConfig::default()
        .with_base_url("https://cli.local/")
        .expect("valid url");
    assert_eq!(config.base_url, "https://cli.local");

    let result = AppConfig::default().with_base_url("not a url");
    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
}
