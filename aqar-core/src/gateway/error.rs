use crate::constants::{CONNECTION_ERROR, PROCESSING_ERROR};
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the remote chat gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to build HTTP client: {0}")]
    Setup(#[source] reqwest::Error),

    #[error("request to '{endpoint}' did not complete: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{endpoint}' returned an unreadable body: {reason}")]
    InvalidResponse { endpoint: String, reason: String },

    #[error("cannot build request URL from '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("'{endpoint}' answered with HTTP {status}")]
    Status { endpoint: String, status: StatusCode },

    #[error("'{endpoint}' reported a failure: {}", message.as_deref().unwrap_or("no details"))]
    Application {
        endpoint: String,
        message: Option<String>,
    },
}

impl GatewayError {
    pub fn transport(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn invalid_response(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn status(endpoint: impl Into<String>, status: StatusCode) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    pub fn application(endpoint: impl Into<String>, message: Option<String>) -> Self {
        Self::Application {
            endpoint: endpoint.into(),
            message,
        }
    }

    /// True when the request never produced a usable answer.
    ///
    /// An unreadable body counts as transport: the exchange broke before the
    /// service could say anything meaningful.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GatewayError::Setup(_)
                | GatewayError::Transport { .. }
                | GatewayError::InvalidUrl { .. }
                | GatewayError::InvalidResponse { .. }
        )
    }

    /// Localized text shown in the transcript when a send fails
    pub fn user_message(&self) -> &'static str {
        if self.is_transport() {
            CONNECTION_ERROR
        } else {
            PROCESSING_ERROR
        }
    }
}
