//! Core of the aqar chat client.
//!
//! - `domain`: conversation ids, messages, dialects
//! - `gateway`: the remote chat service seen through typed responses
//! - `view`: UI-agnostic view model (transcript, selectors, composer)
//! - `controller`: keeps the view consistent across async completions

pub mod constants;
pub mod controller;
pub mod domain;
pub mod gateway;
pub mod view;

pub use controller::{Completion, ConversationController};
pub use domain::types::{ConversationId, Dialect, Direction, Message};
pub use gateway::{ChatGateway, GatewayError, HttpChatGateway};
pub use view::ChatView;
