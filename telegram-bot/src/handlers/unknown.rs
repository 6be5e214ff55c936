//! Fallback reply for text that is not a command.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::debug;

pub const UNRECOGNIZED_REPLY: &str =
    "Sorry, I didn't understand that command. Try /hello to get started!";

/// Default handler for text that is not a command.
pub struct UnknownTextHandler {
    bot: Arc<dyn Bot>,
}

impl UnknownTextHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for UnknownTextHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(chat_id = message.chat.id, "Unrecognized text");
        self.bot.reply_to(message, UNRECOGNIZED_REPLY).await?;
        Ok(HandlerResponse::Reply(UNRECOGNIZED_REPLY.to_string()))
    }
}
