use aqar_core::ConversationId;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "aqar",
    version,
    about = "Chat client for the aqar real-estate assistant"
)]
pub struct Cli {
    /// Configuration file (defaults to config/client.toml)
    #[arg(long)]
    pub config: Option<String>,
    /// Chat service base URL, overrides the config file and AQAR_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
    /// Open this conversation on start
    #[arg(long)]
    pub chat: Option<ConversationId>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Full-screen terminal interface
    Tui,
    /// Line-oriented chat over stdin/stdout
    Stdio,
}
