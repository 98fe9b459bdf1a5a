//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so it only logs when a log file is configured.
//! Stdio mode logs to stderr and keeps stdout for the conversation.

use crate::cli::RunMode;
use crate::error::AppError;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_tracing(mode: RunMode, log_file: Option<&Path>) -> Result<(), AppError> {
    let file = match log_file {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| AppError::LogFile {
                    path: path.to_path_buf(),
                    source,
                })?,
        ),
        None => None,
    };

    INIT.call_once(|| match (mode, file) {
        (_, Some(file)) => {
            fmt()
                .with_env_filter(env_filter("info"))
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (RunMode::Tui, None) => {
            fmt().with_env_filter(EnvFilter::new("off")).init();
        }
        (RunMode::Stdio, None) => {
            fmt()
                .with_env_filter(env_filter("warn"))
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .init();
        }
    });
    Ok(())
}
