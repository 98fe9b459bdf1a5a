//! Chat screen key handling tests

use aqar_cli::tui::chat::{Focus, InputAction, ScreenState, handle_input};
use aqar_core::ConversationId;
use aqar_core::Dialect;
use aqar_core::gateway::ConversationSummary;
use aqar_core::view::ChatView;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_text(screen: &mut ScreenState, view: &mut ChatView, text: &str) {
    for c in text.chars() {
        handle_input(screen, view, key(KeyCode::Char(c)));
    }
}

#[test]
fn typing_fills_composer() {
    let mut screen = ScreenState::new();
    let mut view = ChatView::default();

    type_text(&mut screen, &mut view, "شقة");
    handle_input(&mut screen, &mut view, key(KeyCode::Backspace));

    assert_eq!(view.composer.text(), "شق");
    assert_eq!(view.composer.cursor(), 2);
}

#[test]
fn enter_submits_only_non_blank_text() {
    let mut screen = ScreenState::new();
    let mut view = ChatView::default();

    type_text(&mut screen, &mut view, "   ");
    assert_eq!(
        handle_input(&mut screen, &mut view, key(KeyCode::Enter)),
        InputAction::None
    );

    type_text(&mut screen, &mut view, "hi");
    assert_eq!(
        handle_input(&mut screen, &mut view, key(KeyCode::Enter)),
        InputAction::Submit
    );
}

#[test]
fn global_shortcuts() {
    let mut screen = ScreenState::new();
    let mut view = ChatView::default();

    assert_eq!(handle_input(&mut screen, &mut view, ctrl('q')), InputAction::Exit);
    assert_eq!(handle_input(&mut screen, &mut view, key(KeyCode::Esc)), InputAction::Exit);
    assert_eq!(
        handle_input(&mut screen, &mut view, ctrl('n')),
        InputAction::NewConversation
    );
    assert_eq!(handle_input(&mut screen, &mut view, ctrl('r')), InputAction::Refresh);
    assert!(view.composer.is_empty());
}

#[test]
fn tab_cycles_focus() {
    let mut screen = ScreenState::new();
    let mut view = ChatView::default();

    handle_input(&mut screen, &mut view, key(KeyCode::Tab));
    assert_eq!(screen.focus, Focus::Conversations);
    handle_input(&mut screen, &mut view, key(KeyCode::Tab));
    assert_eq!(screen.focus, Focus::Dialects);
    handle_input(&mut screen, &mut view, key(KeyCode::BackTab));
    assert_eq!(screen.focus, Focus::Conversations);
}

#[test]
fn composer_scroll_keys() {
    let mut screen = ScreenState::new();
    let mut view = ChatView::default();

    assert_eq!(
        handle_input(&mut screen, &mut view, key(KeyCode::PageUp)),
        InputAction::ScrollUp
    );
    assert_eq!(
        handle_input(&mut screen, &mut view, key(KeyCode::Down)),
        InputAction::ScrollDown
    );
    assert_eq!(handle_input(&mut screen, &mut view, ctrl('u')), InputAction::ScrollTop);
    assert_eq!(handle_input(&mut screen, &mut view, ctrl('d')), InputAction::ScrollBottom);
}

#[test]
fn conversation_panel_selects_row_under_cursor() {
    let mut screen = ScreenState::new();
    screen.focus = Focus::Conversations;
    let mut view = ChatView::default();
    view.selector.replace(vec![
        ConversationSummary::new(1_i64, "أولى"),
        ConversationSummary::new(2_i64, "ثانية"),
    ]);

    handle_input(&mut screen, &mut view, key(KeyCode::Down));

    assert_eq!(
        handle_input(&mut screen, &mut view, key(KeyCode::Enter)),
        InputAction::SelectConversation(ConversationId::Number(2))
    );
}

#[test]
fn empty_conversation_panel_does_nothing() {
    let mut screen = ScreenState::new();
    screen.focus = Focus::Conversations;
    let mut view = ChatView::default();

    assert_eq!(
        handle_input(&mut screen, &mut view, key(KeyCode::Enter)),
        InputAction::None
    );
}

#[test]
fn dialect_panel_changes_dialect() {
    let mut screen = ScreenState::new();
    screen.focus = Focus::Dialects;
    let mut view = ChatView::default();
    view.dialects
        .replace_options(&[Dialect::new("egyptian"), Dialect::new("gulf")]);

    handle_input(&mut screen, &mut view, key(KeyCode::Up));

    assert_eq!(
        handle_input(&mut screen, &mut view, key(KeyCode::Enter)),
        InputAction::ChangeDialect("gulf".to_string())
    );
}

#[test]
fn loading_frame_only_advances_while_typing() {
    let mut screen = ScreenState::new();

    screen.tick_loading(false);
    assert_eq!(screen.loading_frame, 0);

    for _ in 0..5 {
        screen.tick_loading(true);
    }
    assert_eq!(screen.loading_frame, 1);
}
