//! `/ai` and `/clear` handlers. Both send exactly one reply per message.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result, TextFormat};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::ChatError;
use crate::messages;
use crate::tracker::ConversationTracker;

/// Answers `/ai <question>` through the tracker. Shows "typing" while generating; every
/// [`ChatError`] becomes a chat reply.
pub struct AskHandler {
    bot: Arc<dyn Bot>,
    tracker: Arc<ConversationTracker>,
}

impl AskHandler {
    pub fn new(bot: Arc<dyn Bot>, tracker: Arc<ConversationTracker>) -> Self {
        Self { bot, tracker }
    }

    async fn answer(&self, message: &Message) -> std::result::Result<String, ChatError> {
        let user_id = message.user_id().ok_or(ChatError::MissingIdentity)?;
        let bot = &self.bot;
        let chat = &message.chat;
        self.tracker
            .handle_question_with(user_id, &message.content, move || async move {
                if let Err(e) = bot.send_typing(chat).await {
                    warn!(error = %e, chat_id = chat.id, "Failed to send typing indicator");
                }
            })
            .await
    }
}

#[async_trait]
impl Handler for AskHandler {
    #[instrument(skip(self, message), fields(user_id = ?message.user_id(), chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let (text, format) = match self.answer(message).await {
            Ok(reply) => (reply, TextFormat::Plain),
            Err(e) => {
                info!(error = %e, "AI request not answered");
                messages::reply_for_error(&e)
            }
        };
        self.bot.send_formatted(&message.chat, &text, format).await?;
        Ok(HandlerResponse::Reply(text))
    }
}

/// `/clear`: drops the sender's transcript and cooldown.
pub struct ClearHandler {
    bot: Arc<dyn Bot>,
    tracker: Arc<ConversationTracker>,
}

impl ClearHandler {
    pub fn new(bot: Arc<dyn Bot>, tracker: Arc<ConversationTracker>) -> Self {
        Self { bot, tracker }
    }
}

#[async_trait]
impl Handler for ClearHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let (text, format) = match message.user_id() {
            Some(user_id) => {
                self.tracker.clear(user_id);
                (messages::CLEARED, TextFormat::Markdown)
            }
            None => (messages::UNKNOWN_USER, TextFormat::Plain),
        };
        self.bot.send_formatted(&message.chat, text, format).await?;
        Ok(HandlerResponse::Reply(text.to_string()))
    }
}
