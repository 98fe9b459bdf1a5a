//! Line-oriented chat over stdin/stdout
//!
//! Every line is handled to completion: the controller settles before the
//! next prompt, and only transcript entries that are new since the last
//! prompt get printed.

use aqar_core::view::ChatView;
use aqar_core::{ChatGateway, ConversationController, ConversationId, Direction};
use thiserror::Error;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

#[derive(Debug, Error)]
pub enum StdioError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
}

enum LoopControl {
    Continue,
    Exit,
}

/// Tracks how much of the transcript has been printed
#[derive(Default)]
struct PrintCursor {
    printed: usize,
}

impl PrintCursor {
    fn reset(&mut self) {
        self.printed = 0;
    }
}

pub async fn run<G>(controller: &mut ConversationController<G>) -> Result<(), StdioError>
where
    G: ChatGateway + 'static,
{
    let stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    run_with(controller, stdin, &mut stdout).await
}

/// Drive the controller from `input`, writing the conversation to `output`
pub async fn run_with<G, R, W>(
    controller: &mut ConversationController<G>,
    input: R,
    output: &mut W,
) -> Result<(), StdioError>
where
    G: ChatGateway + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut cursor = PrintCursor::default();

    controller.initialize();
    controller.settle().await;
    print_header(output, controller.view()).await?;
    print_new_messages(output, controller.view(), &mut cursor).await?;

    loop {
        write_str(output, "> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            write_line(output, "").await?;
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let control = if input.starts_with('/') {
            handle_command(input, controller, output, &mut cursor).await?
        } else {
            controller.submit_user_message(input);
            LoopControl::Continue
        };

        controller.settle().await;
        print_new_messages(output, controller.view(), &mut cursor).await?;

        if let LoopControl::Exit = control {
            break;
        }
    }

    output.flush().await?;
    Ok(())
}

async fn handle_command<G, W>(
    input: &str,
    controller: &mut ConversationController<G>,
    output: &mut W,
    cursor: &mut PrintCursor,
) -> Result<LoopControl, StdioError>
where
    G: ChatGateway + 'static,
    W: AsyncWrite + Unpin,
{
    let command = input.trim_start_matches('/');
    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };
    let name = name.to_ascii_lowercase();
    debug!(command = %name, "Processing stdio command");

    match name.as_str() {
        "" => {}
        "help" | "?" => print_help(output).await?,
        "exit" | "quit" | "q" => {
            write_line(output, "Bye.").await?;
            return Ok(LoopControl::Exit);
        }
        "new" => {
            controller.new_conversation();
            cursor.reset();
            write_line(output, "Started a new conversation.").await?;
        }
        "chat" => {
            if argument.is_empty() {
                write_line(output, "Usage: /chat <id>").await?;
            } else {
                let id: ConversationId = match argument.parse() {
                    Ok(id) => id,
                    Err(never) => match never {},
                };
                controller.select_conversation(id);
                controller.settle().await;
                cursor.reset();
                print_header(output, controller.view()).await?;
            }
        }
        "chats" => {
            controller.load_conversations();
            controller.settle().await;
            print_conversations(output, controller.view()).await?;
        }
        "dialects" => {
            controller.load_dialect_options();
            controller.settle().await;
            print_dialects(output, controller.view()).await?;
        }
        "dialect" => {
            if argument.is_empty() {
                write_line(output, "Usage: /dialect <name>").await?;
            } else {
                controller.change_dialect(argument);
            }
        }
        other => {
            write_line(
                output,
                &format!("Unknown command '/{other}'. Type /help for commands."),
            )
            .await?;
        }
    }
    Ok(LoopControl::Continue)
}

async fn print_help<W: AsyncWrite + Unpin>(output: &mut W) -> Result<(), StdioError> {
    write_line(
        output,
        "Commands:\n  /chats          list conversations\n  /chat <id>      open a conversation\n  /new            start a new conversation\n  /dialects       list dialects\n  /dialect <name> switch dialect\n  /exit           quit\nAnything else is sent as a message.",
    )
    .await
}

async fn print_header<W: AsyncWrite + Unpin>(
    output: &mut W,
    view: &ChatView,
) -> Result<(), StdioError> {
    write_line(output, &format!("== {} ==", view.header_title)).await?;
    if let Some(header) = view.transcript.header() {
        write_line(output, &format!("-- {header} --")).await?;
    }
    Ok(())
}

async fn print_new_messages<W: AsyncWrite + Unpin>(
    output: &mut W,
    view: &ChatView,
    cursor: &mut PrintCursor,
) -> Result<(), StdioError> {
    let total = view.transcript.message_count();
    if cursor.printed > total {
        cursor.printed = 0;
    }
    for message in view.transcript.messages().skip(cursor.printed) {
        let who = match message.direction {
            Direction::Outbound => "You",
            Direction::Inbound => "Agent",
        };
        write_line(output, &format!("[{}] {who}: {}", message.time, message.text)).await?;
    }
    cursor.printed = total;
    Ok(())
}

async fn print_conversations<W: AsyncWrite + Unpin>(
    output: &mut W,
    view: &ChatView,
) -> Result<(), StdioError> {
    if view.selector.is_empty() {
        return write_line(output, "No conversations yet.").await;
    }
    for entry in view.selector.entries() {
        let marker = if entry.active { "*" } else { " " };
        let preview = if entry.last_message.is_empty() {
            String::new()
        } else {
            format!("  {} {}", entry.time, entry.last_message)
        };
        write_line(output, &format!("{marker} {}  {}{preview}", entry.id, entry.title)).await?;
    }
    Ok(())
}

async fn print_dialects<W: AsyncWrite + Unpin>(
    output: &mut W,
    view: &ChatView,
) -> Result<(), StdioError> {
    let selected = view.dialects.selected().map(|option| option.value.as_str());
    for option in view.dialects.options() {
        let marker = if Some(option.value.as_str()) == selected {
            "*"
        } else {
            " "
        };
        write_line(output, &format!("{marker} {} ({})", option.label, option.value)).await?;
    }
    Ok(())
}

async fn write_str<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<(), StdioError> {
    output.write_all(text.as_bytes()).await?;
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<(), StdioError> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    Ok(())
}
