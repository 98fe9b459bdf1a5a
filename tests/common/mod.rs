//! Scripted chat gateway shared by the controller and stdio tests
//!
//! Every call pops the next scripted answer for its endpoint and waits the
//! scripted delay before returning it. Run tests with a paused clock so the
//! delays decide the order completions arrive in.

#![allow(dead_code)]

use aqar_core::gateway::{ChatReply, ConversationSummary, HistoryEntry, SendMessageRequest};
use aqar_core::view::ChatView;
use aqar_core::{ChatGateway, ConversationController, ConversationId, Dialect, GatewayError};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const GREETING: &str = "أهلاً بك";
pub const HEADER: &str = "Today";

struct Scripted<T> {
    delay: Duration,
    result: Result<T, GatewayError>,
}

type Queue<T> = Mutex<VecDeque<Scripted<T>>>;

#[derive(Default)]
pub struct ScriptedGateway {
    greetings: Queue<String>,
    replies: Queue<ChatReply>,
    histories: Mutex<HashMap<ConversationId, VecDeque<Scripted<Vec<HistoryEntry>>>>>,
    dialects: Queue<Vec<Dialect>>,
    dialect_changes: Queue<String>,
    conversations: Queue<Vec<ConversationSummary>>,
    sent: Mutex<Vec<SendMessageRequest>>,
    history_requests: Mutex<Vec<ConversationId>>,
    dialect_requests: Mutex<Vec<String>>,
}

fn push<T>(queue: &Queue<T>, delay_ms: u64, result: Result<T, GatewayError>) {
    queue.lock().unwrap().push_back(Scripted {
        delay: Duration::from_millis(delay_ms),
        result,
    });
}

async fn pop<T>(queue: &Queue<T>, fallback: impl FnOnce() -> Result<T, GatewayError>) -> Result<T, GatewayError> {
    let next = queue.lock().unwrap().pop_front();
    match next {
        Some(scripted) => {
            tokio::time::sleep(scripted.delay).await;
            scripted.result
        }
        None => fallback(),
    }
}

pub fn processing_failure(endpoint: &str) -> GatewayError {
    GatewayError::application(endpoint, None)
}

pub fn connection_failure(endpoint: &str) -> GatewayError {
    GatewayError::invalid_response(endpoint, "connection reset")
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn greeting(&self, delay_ms: u64, result: Result<&str, GatewayError>) -> &Self {
        push(&self.greetings, delay_ms, result.map(str::to_string));
        self
    }

    pub fn reply(&self, delay_ms: u64, chat_id: impl Into<ConversationId>, message: &str) -> &Self {
        let reply = ChatReply {
            chat_id: chat_id.into(),
            message: message.to_string(),
        };
        push(&self.replies, delay_ms, Ok(reply));
        self
    }

    pub fn reply_error(&self, delay_ms: u64, error: GatewayError) -> &Self {
        push(&self.replies, delay_ms, Err(error));
        self
    }

    fn push_history(
        &self,
        id: ConversationId,
        delay_ms: u64,
        result: Result<Vec<HistoryEntry>, GatewayError>,
    ) -> &Self {
        self.histories
            .lock()
            .unwrap()
            .entry(id)
            .or_default()
            .push_back(Scripted {
                delay: Duration::from_millis(delay_ms),
                result,
            });
        self
    }

    pub fn history(
        &self,
        id: impl Into<ConversationId>,
        delay_ms: u64,
        entries: Vec<HistoryEntry>,
    ) -> &Self {
        self.push_history(id.into(), delay_ms, Ok(entries))
    }

    pub fn history_error(
        &self,
        id: impl Into<ConversationId>,
        delay_ms: u64,
        error: GatewayError,
    ) -> &Self {
        self.push_history(id.into(), delay_ms, Err(error))
    }

    pub fn dialect_list(&self, delay_ms: u64, names: &[&str]) -> &Self {
        let dialects = names.iter().map(|name| Dialect::new(*name)).collect();
        push(&self.dialects, delay_ms, Ok(dialects));
        self
    }

    pub fn dialect_list_error(&self, delay_ms: u64, error: GatewayError) -> &Self {
        push(&self.dialects, delay_ms, Err(error));
        self
    }

    pub fn dialect_change(&self, delay_ms: u64, result: Result<&str, GatewayError>) -> &Self {
        push(&self.dialect_changes, delay_ms, result.map(str::to_string));
        self
    }

    pub fn conversation_list(&self, delay_ms: u64, chats: Vec<ConversationSummary>) -> &Self {
        push(&self.conversations, delay_ms, Ok(chats));
        self
    }

    pub fn conversation_list_error(&self, delay_ms: u64, error: GatewayError) -> &Self {
        push(&self.conversations, delay_ms, Err(error));
        self
    }

    pub fn sent(&self) -> Vec<SendMessageRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn history_requests(&self) -> Vec<ConversationId> {
        self.history_requests.lock().unwrap().clone()
    }

    pub fn dialect_requests(&self) -> Vec<String> {
        self.dialect_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatGateway for ScriptedGateway {
    async fn initial_message(&self) -> Result<String, GatewayError> {
        pop(&self.greetings, || Ok(GREETING.to_string())).await
    }

    async fn send_message(&self, request: SendMessageRequest) -> Result<ChatReply, GatewayError> {
        self.sent.lock().unwrap().push(request);
        pop(&self.replies, || Err(processing_failure("/api/chat"))).await
    }

    async fn history(&self, id: &ConversationId) -> Result<Vec<HistoryEntry>, GatewayError> {
        self.history_requests.lock().unwrap().push(id.clone());
        let next = self
            .histories
            .lock()
            .unwrap()
            .get_mut(id)
            .and_then(VecDeque::pop_front);
        match next {
            Some(scripted) => {
                tokio::time::sleep(scripted.delay).await;
                scripted.result
            }
            None => Ok(Vec::new()),
        }
    }

    async fn dialects(&self) -> Result<Vec<Dialect>, GatewayError> {
        pop(&self.dialects, || Ok(Vec::new())).await
    }

    async fn set_dialect(&self, dialect: &str) -> Result<String, GatewayError> {
        self.dialect_requests.lock().unwrap().push(dialect.to_string());
        pop(&self.dialect_changes, || Ok(format!("dialect: {dialect}"))).await
    }

    async fn conversations(&self) -> Result<Vec<ConversationSummary>, GatewayError> {
        pop(&self.conversations, || Ok(Vec::new())).await
    }
}

pub fn controller(gateway: &Arc<ScriptedGateway>) -> ConversationController<ScriptedGateway> {
    ConversationController::new(Arc::clone(gateway), ChatView::new(Some(HEADER.to_string())))
}

/// Initialize and wait until the first-load requests are applied
pub async fn ready_controller(
    gateway: &Arc<ScriptedGateway>,
) -> ConversationController<ScriptedGateway> {
    let mut controller = controller(gateway);
    controller.initialize();
    controller.settle().await;
    controller
}

/// `(is_user, text)` for every rendered message
pub fn transcript(controller: &ConversationController<ScriptedGateway>) -> Vec<(bool, String)> {
    controller
        .view()
        .transcript
        .messages()
        .map(|message| (message.is_from_user(), message.text.clone()))
        .collect()
}
