//! Domain types shared by the gateway, the view and the controller

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Server-issued conversation identifier.
///
/// The service hands out integers, but the id is treated as opaque and is
/// sent back in the same JSON shape it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConversationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationId::Number(n) => write!(f, "{n}"),
            ConversationId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for ConversationId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<i64>() {
            Ok(n) => ConversationId::Number(n),
            Err(_) => ConversationId::Text(trimmed.to_string()),
        })
    }
}

impl From<&str> for ConversationId {
    fn from(value: &str) -> Self {
        ConversationId::Text(value.to_string())
    }
}

impl From<String> for ConversationId {
    fn from(value: String) -> Self {
        ConversationId::Text(value)
    }
}

impl From<i64> for ConversationId {
    fn from(value: i64) -> Self {
        ConversationId::Number(value)
    }
}

/// Which side of the conversation a message came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Written by the user
    Outbound,
    /// Written by the assistant
    Inbound,
}

/// A rendered chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub direction: Direction,
    /// Display time, `HH:MM`
    pub time: String,
}

impl Message {
    pub fn outbound(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            direction: Direction::Outbound,
            time: clock_time(),
        }
    }

    pub fn inbound(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            direction: Direction::Inbound,
            time: clock_time(),
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn is_from_user(&self) -> bool {
        self.direction == Direction::Outbound
    }
}

/// A language variant offered by the service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dialect {
    name: String,
}

impl Dialect {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Raw value sent to the service
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display form: first character upper-cased, rest untouched
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Current local time as `HH:MM`
pub fn clock_time() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Extract `HH:MM` from an ISO-8601 timestamp, with or without offset.
pub fn time_from_iso(value: &str) -> Option<String> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Local).format("%H:%M").to_string());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.format("%H:%M").to_string())
}
