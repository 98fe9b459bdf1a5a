//! HTTP implementation of the chat gateway

use super::dto::{
    ChatReply, ChatsPayload, ConversationSummary, DialectRequest, DialectsPayload, Envelope,
    HistoryEntry, HistoryPayload, SendMessageRequest, StatusPolicy, TextPayload,
};
use super::error::GatewayError;
use super::ChatGateway;
use crate::constants::{
    CHAT_PATH, CHATS_PATH, DIALECT_PATH, DIALECTS_PATH, INITIAL_MESSAGE_PATH, MESSAGES_PATH,
};
use crate::domain::types::{ConversationId, Dialect};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Chat gateway backed by `reqwest`
#[derive(Clone)]
pub struct HttpChatGateway {
    base_url: String,
    http: Client,
}

impl HttpChatGateway {
    /// Creates a gateway without a client-side timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Creates a gateway whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::Setup)?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    /// Build URL from base URL and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// URL for `path` followed by `segment`, percent-encoded as one path segment
    pub fn build_segment_url(&self, path: &str, segment: &str) -> Result<Url, GatewayError> {
        let raw = self.build_url(path);
        let mut url = Url::parse(&raw).map_err(|e| GatewayError::invalid_url(&raw, e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| GatewayError::invalid_url(&raw, "URL cannot carry path segments"))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    async fn fetch<T>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
        policy: StatusPolicy,
    ) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        debug!(endpoint, "Sending request to chat service");

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::transport(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::status(endpoint, status));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::transport(endpoint, e))?;

        Envelope::<T>::decode(body, policy)
            .map_err(|e| GatewayError::invalid_response(endpoint, e.to_string()))?
            .into_result(endpoint)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        policy: StatusPolicy,
    ) -> Result<T, GatewayError> {
        let request = self.http.get(self.build_url(path));
        self.fetch(request, path, policy).await
    }

    async fn post<Req, Res>(&self, path: &str, body: &Req) -> Result<Res, GatewayError>
    where
        Req: serde::Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let request = self.http.post(self.build_url(path)).json(body);
        self.fetch(request, path, StatusPolicy::Required).await
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn initial_message(&self) -> Result<String, GatewayError> {
        let payload: TextPayload = self
            .get(INITIAL_MESSAGE_PATH, StatusPolicy::Required)
            .await?;
        Ok(payload.message)
    }

    async fn send_message(&self, request: SendMessageRequest) -> Result<ChatReply, GatewayError> {
        self.post(CHAT_PATH, &request).await
    }

    async fn history(&self, id: &ConversationId) -> Result<Vec<HistoryEntry>, GatewayError> {
        let url = self.build_segment_url(MESSAGES_PATH, &id.to_string())?;
        let request = self.http.get(url);
        let payload: HistoryPayload = self
            .fetch(request, MESSAGES_PATH, StatusPolicy::Optional)
            .await?;
        Ok(payload.messages)
    }

    async fn dialects(&self) -> Result<Vec<Dialect>, GatewayError> {
        let payload: DialectsPayload = self.get(DIALECTS_PATH, StatusPolicy::Required).await?;
        Ok(payload.dialects.into_iter().map(Dialect::new).collect())
    }

    async fn set_dialect(&self, dialect: &str) -> Result<String, GatewayError> {
        let request = DialectRequest {
            dialect: dialect.to_string(),
        };
        let payload: TextPayload = self.post(DIALECT_PATH, &request).await?;
        Ok(payload.message)
    }

    async fn conversations(&self) -> Result<Vec<ConversationSummary>, GatewayError> {
        let payload: ChatsPayload = self.get(CHATS_PATH, StatusPolicy::Optional).await?;
        Ok(payload.chats)
    }
}
