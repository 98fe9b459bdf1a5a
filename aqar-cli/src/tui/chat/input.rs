//! Chat input handling

use super::state::{Focus, ScreenState};
use aqar_core::ConversationId;
use aqar_core::view::ChatView;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Send the composer contents
    Submit,
    /// Exit the chat
    Exit,
    /// Open a conversation
    SelectConversation(ConversationId),
    /// Switch the service dialect
    ChangeDialect(String),
    /// Leave the open conversation
    NewConversation,
    /// Reload conversations and dialects
    Refresh,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
}

/// Handle a terminal event, updating local state, and report what the runner should do
pub fn handle_input(screen: &mut ScreenState, view: &mut ChatView, event: Event) -> InputAction {
    match event {
        Event::Key(key) => handle_key(screen, view, key),
        _ => InputAction::None,
    }
}

fn handle_key(screen: &mut ScreenState, view: &mut ChatView, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') if ctrl => return InputAction::Exit,
        KeyCode::Char('n') if ctrl => return InputAction::NewConversation,
        KeyCode::Char('r') if ctrl => return InputAction::Refresh,
        KeyCode::Esc => return InputAction::Exit,
        KeyCode::Tab => {
            screen.focus = screen.focus.next();
            return InputAction::None;
        }
        KeyCode::BackTab => {
            screen.focus = screen.focus.previous();
            return InputAction::None;
        }
        _ => {}
    }

    match screen.focus {
        Focus::Composer => handle_composer_key(view, key),
        Focus::Conversations => handle_conversations_key(view, key),
        Focus::Dialects => handle_dialects_key(view, key),
    }
}

fn handle_composer_key(view: &mut ChatView, key: KeyEvent) -> InputAction {
    let composer = &mut view.composer;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => {
            if composer.text().trim().is_empty() {
                InputAction::None
            } else {
                InputAction::Submit
            }
        }
        KeyCode::Char('c') if ctrl => {
            composer.clear();
            InputAction::None
        }
        KeyCode::Char('u') if ctrl => InputAction::ScrollTop,
        KeyCode::Char('d') if ctrl => InputAction::ScrollBottom,
        KeyCode::Backspace => {
            composer.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            composer.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            composer.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            composer.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            composer.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            composer.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char(c) if !ctrl => {
            composer.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn handle_conversations_key(view: &mut ChatView, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            view.selector.cursor_up();
            InputAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view.selector.cursor_down();
            InputAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => view
            .selector
            .cursor_id()
            .cloned()
            .map(InputAction::SelectConversation)
            .unwrap_or(InputAction::None),
        _ => InputAction::None,
    }
}

fn handle_dialects_key(view: &mut ChatView, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            view.dialects.cursor_up();
            InputAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view.dialects.cursor_down();
            InputAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => view
            .dialects
            .cursor_value()
            .map(|value| InputAction::ChangeDialect(value.to_string()))
            .unwrap_or(InputAction::None),
        _ => InputAction::None,
    }
}
