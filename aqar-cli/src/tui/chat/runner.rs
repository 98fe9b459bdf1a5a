//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_input};
use super::state::ScreenState;
use super::ui::ChatUI;
use crate::tui::terminal::{Tui, init_terminal, install_panic_hook, restore_terminal};
use aqar_core::{ChatGateway, ConversationController};
use crossterm::event;
use std::io;
use std::time::Duration;
use tracing::{debug, info};

/// Run the TUI chat interface until the user exits
pub async fn run_chat<G>(
    controller: &mut ConversationController<G>,
    base_url: &str,
) -> io::Result<()>
where
    G: ChatGateway + 'static,
{
    install_panic_hook();
    let mut terminal = init_terminal()?;
    controller.initialize();

    let result = run_chat_loop(&mut terminal, controller, base_url).await;

    restore_terminal()?;
    result
}

async fn run_chat_loop<G>(
    terminal: &mut Tui,
    controller: &mut ConversationController<G>,
    base_url: &str,
) -> io::Result<()>
where
    G: ChatGateway + 'static,
{
    let mut screen = ScreenState::new();

    loop {
        controller.pump();
        terminal.draw(|frame| {
            ChatUI::render(frame, &mut screen, controller.view(), base_url);
        })?;

        let typing = controller.view().transcript.is_typing();
        let timeout = if typing {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            let action = handle_input(&mut screen, controller.view_mut(), event);
            if action != InputAction::None {
                debug!(?action, "Chat input");
            }

            match action {
                InputAction::Exit => {
                    info!("Leaving chat");
                    return Ok(());
                }
                InputAction::Submit => {
                    controller.submit_composer();
                }
                InputAction::SelectConversation(id) => {
                    controller.select_conversation(id);
                }
                InputAction::ChangeDialect(dialect) => {
                    controller.change_dialect(&dialect);
                }
                InputAction::NewConversation => {
                    controller.new_conversation();
                }
                InputAction::Refresh => {
                    controller.load_conversations();
                    controller.load_dialect_options();
                }
                InputAction::ScrollUp => {
                    controller.view_mut().transcript.scroll_up(screen.max_scroll);
                }
                InputAction::ScrollDown => {
                    controller
                        .view_mut()
                        .transcript
                        .scroll_down(screen.max_scroll);
                }
                InputAction::ScrollTop => {
                    controller.view_mut().transcript.scroll_to_top();
                }
                InputAction::ScrollBottom => {
                    controller.view_mut().transcript.scroll_to_bottom();
                }
                InputAction::None => {}
            }
        } else {
            screen.tick_loading(typing);
        }

        // Let spawned requests make progress on a current-thread runtime
        tokio::task::yield_now().await;
    }
}
