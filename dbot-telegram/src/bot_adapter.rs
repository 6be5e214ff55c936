//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, Result, TextFormat};
use teloxide::{
    prelude::*,
    types::{ChatAction, ChatId, ParseMode},
};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Legacy Markdown keeps `*bold*` and backticks readable without MarkdownV2 escaping.
#[allow(deprecated)]
fn parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Markdown => Some(ParseMode::Markdown),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_formatted(&self, chat: &Chat, text: &str, format: TextFormat) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), text.to_string());
        let sent = match parse_mode(format) {
            Some(mode) => request.parse_mode(mode).await,
            None => request.await,
        }
        .map_err(|e| DbotError::Bot(e.to_string()))?;
        debug!(chat_id = chat.id, message_id = %sent.id, format = ?format, "Message sent");
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
