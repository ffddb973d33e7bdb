//! Terminal front-end for the chat widget.
//!
//! Each input line is typed into the widget and sent with Enter. `/clear`
//! clears the conversation, `/quit` (or EOF) exits once any pending reply
//! has landed.

use std::io::Write as _;
use std::sync::Arc;

use clap::Parser;
use site_chat::chat::message::{Message, MessageId, Sender};
use site_chat::chat::timing::ReplyTiming;
use site_chat::chat::view::TranscriptView;
use site_chat::chat::{ChatController, Key, Reply};
use site_chat::llm::LlmClient;
use site_chat::llm::config::LlmConfig;
use site_chat::llm::types::LlmError;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] LlmError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("reply task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Parser, Debug)]
#[command(name = "site-chat", about = "Chat with the site's AI assistant from a terminal")]
struct Cli {
    /// Completion endpoint.
    #[arg(long, env = "CHAT_ENDPOINT")]
    endpoint: Option<String>,

    /// Never call the endpoint; always answer with offline responses.
    #[arg(long, env = "CHAT_OFFLINE", value_parser = clap::builder::BoolishValueParser::new())]
    offline: bool,

    /// Log at debug level instead of warn.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

enum Event {
    Line(Option<String>),
    Landed(Result<Reply, tokio::task::JoinError>),
}

struct TerminalView;

impl TranscriptView for TerminalView {
    fn append(&self, message: &Message) {
        let who = match message.sender {
            Sender::User => "you",
            Sender::Bot => "bot",
        };
        println!("[{}] {who}: {}", message.time_label(), message.text);
        if let Some(note) = message.annotation() {
            println!("        {note}");
        }
    }

    fn set_typing(&self, visible: bool) {
        if visible {
            println!("        bot is typing...");
        }
    }

    fn remove(&self, ids: &[MessageId]) {
        println!("(cleared {} messages)", ids.len());
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = LlmConfig::from_env()?.with_overrides(cli.endpoint.as_deref(), cli.offline)?;
    let llm = LlmClient::from_config(&config)?;
    if llm.is_offline() {
        tracing::info!("site-chat: offline mode, all replies are local");
    } else {
        tracing::info!(endpoint = %config.endpoint, "site-chat: using remote endpoint");
    }

    let chat = ChatController::new(Arc::new(llm), Arc::new(TerminalView), ReplyTiming::from_env());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<JoinHandle<Reply>> = None;

    loop {
        prompt()?;
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line?),
            reply = wait_pending(&mut pending) => Event::Landed(reply),
        };
        match event {
            Event::Line(None) => break,
            Event::Line(Some(line)) => match line.trim() {
                "/quit" => break,
                "/clear" => chat.clear(),
                _ => {
                    chat.set_input(&line);
                    if let Some(handle) = chat.key_press(Key::Enter, false) {
                        pending = Some(handle);
                    } else if chat.is_awaiting_reply() {
                        println!("(still waiting for the last reply)");
                    }
                }
            },
            Event::Landed(reply) => {
                pending = None;
                reply?;
            }
        }
    }

    if let Some(handle) = pending {
        handle.await?;
    }
    Ok(())
}

async fn wait_pending(pending: &mut Option<JoinHandle<Reply>>) -> Result<Reply, tokio::task::JoinError> {
    match pending.as_mut() {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
