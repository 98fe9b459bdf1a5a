//! Front ends for the aqar chat client: a full-screen TUI and a line-oriented
//! stdio mode, both driving the same [`ConversationController`].

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod stdio;
pub mod tui;

use aqar_core::view::ChatView;
use aqar_core::{ConversationController, HttpChatGateway};
use cli::{Cli, RunMode};
use config::AppConfig;
use error::AppError;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    if let Some(url) = cli.base_url.as_deref() {
        config = config.with_base_url(url)?;
    }

    logging::init_tracing(cli.mode, config.log_file.as_deref())?;
    info!(mode = ?cli.mode, base_url = %config.base_url, "Starting aqar");
    debug!(?config, "Configuration loaded");

    let gateway = match config.request_timeout {
        Some(timeout) => HttpChatGateway::with_timeout(config.base_url.clone(), timeout)?,
        None => HttpChatGateway::new(config.base_url.clone()),
    };
    let view = ChatView::new(Some(config.date_header()));
    let mut controller = ConversationController::new(Arc::new(gateway), view);

    controller.initialize();
    if let Some(id) = cli.chat {
        controller.select_conversation(id);
    }

    match cli.mode {
        RunMode::Tui => tui::run_chat(&mut controller, &config.base_url).await?,
        RunMode::Stdio => stdio::run(&mut controller).await?,
    }
    info!("aqar finished");
    Ok(())
}
