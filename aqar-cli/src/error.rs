use crate::config::ConfigError;
use crate::stdio::StdioError;
use aqar_core::GatewayError;
use thiserror::Error;

/// Top-level failures reported by the `aqar` binary
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Stdio(#[from] StdioError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("failed to open log file {path:?}: {source}")]
    LogFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
