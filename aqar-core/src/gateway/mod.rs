//! Remote chat gateway
//!
//! Stateless request/response calls to the chat service. The controller only
//! talks to the [`ChatGateway`] trait so tests can script the service.

pub mod dto;
mod error;
mod http;

pub use dto::{ChatReply, ConversationSummary, Envelope, HistoryEntry, SendMessageRequest};
pub use error::GatewayError;
pub use http::HttpChatGateway;

use crate::domain::types::{ConversationId, Dialect};
use async_trait::async_trait;

/// Requests the controller can issue against the chat service
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Greeting shown when the client starts
    async fn initial_message(&self) -> Result<String, GatewayError>;

    /// Send a user message, returning the reply and the conversation it landed in
    async fn send_message(&self, request: SendMessageRequest) -> Result<ChatReply, GatewayError>;

    /// Stored messages of a conversation, oldest first
    async fn history(&self, id: &ConversationId) -> Result<Vec<HistoryEntry>, GatewayError>;

    /// Dialects the service can answer in
    async fn dialects(&self) -> Result<Vec<Dialect>, GatewayError>;

    /// Switch the session dialect, returning the service's confirmation text
    async fn set_dialect(&self, dialect: &str) -> Result<String, GatewayError>;

    /// Conversations known to the service
    async fn conversations(&self) -> Result<Vec<ConversationSummary>, GatewayError>;
}
