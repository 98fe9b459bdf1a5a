//! Completed requests waiting to be applied to the view

use crate::domain::types::{ConversationId, Dialect};
use crate::gateway::{ChatReply, ConversationSummary, GatewayError, HistoryEntry};

/// Identifies the view a send was issued from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTicket {
    pub epoch: u64,
    /// Conversation the message was sent to; `None` starts a new one
    pub conversation: Option<ConversationId>,
}

/// Identifies one history load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTicket {
    pub epoch: u64,
    pub generation: u64,
    pub conversation: ConversationId,
}

/// Outcome of a request, delivered in the order responses arrive
#[derive(Debug)]
pub enum Completion {
    Greeting {
        epoch: u64,
        result: Result<String, GatewayError>,
    },
    Reply {
        ticket: SendTicket,
        result: Result<ChatReply, GatewayError>,
    },
    History {
        ticket: HistoryTicket,
        result: Result<Vec<HistoryEntry>, GatewayError>,
    },
    Dialects {
        generation: u64,
        result: Result<Vec<Dialect>, GatewayError>,
    },
    DialectChanged {
        generation: u64,
        dialect: String,
        result: Result<String, GatewayError>,
    },
    Conversations {
        generation: u64,
        result: Result<Vec<ConversationSummary>, GatewayError>,
    },
}

impl Completion {
    /// Short name used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Completion::Greeting { .. } => "greeting",
            Completion::Reply { .. } => "reply",
            Completion::History { .. } => "history",
            Completion::Dialects { .. } => "dialects",
            Completion::DialectChanged { .. } => "dialect_changed",
            Completion::Conversations { .. } => "conversations",
        }
    }
}
