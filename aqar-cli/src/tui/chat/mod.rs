//! Chat screen: conversation panel, dialect panel, transcript and composer

pub mod input;
mod runner;
pub mod state;
mod ui;

pub use input::{InputAction, handle_input};
pub use runner::run_chat;
pub use state::{Focus, ScreenState};
