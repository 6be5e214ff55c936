//! Bot abstraction for outbound messages.
//!
//! [`Bot`] is transport-agnostic; `dbot_telegram::TelegramBotAdapter` implements it via teloxide,
//! tests substitute recording mocks.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Markup mode for an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Plain,
    /// Telegram legacy Markdown (`*bold*`, `` `code` ``).
    Markdown,
}

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message with the given markup mode.
    async fn send_formatted(&self, chat: &Chat, text: &str, format: TextFormat) -> Result<()>;

    /// Shows the "typing" presence indicator in the chat until the next message is sent.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;

    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_formatted(chat, text, TextFormat::Plain).await
    }

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
