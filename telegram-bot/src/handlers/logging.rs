//! Chain-level logging of every update and its outcome.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

/// Logs each message in before() and the outcome in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = ?message.user_id(),
            username = %message.user.as_ref().and_then(|u| u.username.as_deref()).unwrap_or("unknown"),
            chat_id = message.chat.id,
            chat_type = %message.chat.chat_type,
            message_type = %message.message_type,
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let reply_len = match response {
            HandlerResponse::Reply(text) => text.chars().count(),
            _ => 0,
        };
        info!(
            message_id = %message.id,
            chat_id = message.chat.id,
            response_type = response.kind(),
            reply_len,
            "Processed message"
        );
        Ok(())
    }
}
