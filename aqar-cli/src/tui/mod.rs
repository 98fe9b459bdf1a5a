//! TUI module for terminal user interface using Ratatui

pub mod chat;
mod terminal;
mod theme;

pub use chat::run_chat;
pub use terminal::{Tui, init_terminal, install_panic_hook, restore_terminal};
