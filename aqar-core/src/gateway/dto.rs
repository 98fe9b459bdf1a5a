//! Wire types for the chat service
//!
//! Every response is decoded into an [`Envelope`] first, so the controller
//! only ever sees a typed payload or a typed failure.

use super::error::GatewayError;
use crate::domain::types::ConversationId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value of `status` that marks a successful response
pub const STATUS_SUCCESS: &str = "success";

/// How a response without a `status` field is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Missing status is a failure
    Required,
    /// Missing status is a success (history and conversation list)
    Optional,
}

/// A decoded response: the payload, or the failure the service reported
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    Failure { message: Option<String> },
}

impl<T: DeserializeOwned> Envelope<T> {
    pub fn decode(body: Value, policy: StatusPolicy) -> Result<Self, serde_json::Error> {
        let status = body.get("status").and_then(Value::as_str);
        let succeeded = match status {
            Some(status) => status == STATUS_SUCCESS,
            None => policy == StatusPolicy::Optional,
        };

        if !succeeded {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Ok(Envelope::Failure { message });
        }

        serde_json::from_value(body).map(Envelope::Success)
    }
}

impl<T> Envelope<T> {
    pub fn into_result(self, endpoint: &str) -> Result<T, GatewayError> {
        match self {
            Envelope::Success(payload) => Ok(payload),
            Envelope::Failure { message } => Err(GatewayError::application(endpoint, message)),
        }
    }
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SendMessageRequest {
    pub message: String,
    pub chat_id: Option<ConversationId>,
}

/// Body of `POST /api/dialect`
#[derive(Debug, Clone, Serialize)]
pub struct DialectRequest {
    pub dialect: String,
}

/// Successful answer to a sent message
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChatReply {
    pub chat_id: ConversationId,
    pub message: String,
}

/// Greeting and dialect confirmation payloads
#[derive(Debug, Clone, Deserialize)]
pub struct TextPayload {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DialectsPayload {
    pub dialects: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryPayload {
    pub messages: Vec<HistoryEntry>,
}

/// One stored message of a conversation
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub content: String,
    pub is_user: bool,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HistoryEntry {
    pub fn new(content: impl Into<String>, is_user: bool) -> Self {
        Self {
            content: content.into(),
            is_user,
            timestamp: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatsPayload {
    pub chats: Vec<ConversationSummary>,
}

/// Conversation known to the service
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConversationSummary {
    pub id: ConversationId,
    pub title: String,
}

impl ConversationSummary {
    pub fn new(id: impl Into<ConversationId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
