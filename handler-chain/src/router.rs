//! Command router: maps `/command` tokens to handlers and routes plain text to a fallback.
//!
//! - registered command (optionally `@thisbot`) → that handler's `handle`, first registration wins
//! - text without the command prefix → fallback handler
//! - unknown `/command`, commands for another bot, non-text messages → `Ignore`, nothing is sent
//!
//! Only `handle` of routed handlers is called; before/after belong to chain-level handlers.

use async_trait::async_trait;
use dbot_core::{is_command, parse_command, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// Routes each message to exactly one handler (or none). See module docs.
#[derive(Clone)]
pub struct CommandRouter {
    routes: Vec<(String, Arc<dyn Handler>)>,
    fallback: Option<Arc<dyn Handler>>,
    /// Own username, filled from `getMe` at startup; used to drop `/cmd@otherbot`.
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandRouter {
    pub fn new(bot_username: Arc<RwLock<Option<String>>>) -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
            bot_username,
        }
    }

    /// Binds `name` (without the leading `/`) to `handler`. A name registered twice keeps the
    /// first binding.
    pub fn command(mut self, name: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        let name = name.into();
        let name = name.trim_start_matches(dbot_core::COMMAND_PREFIX).to_string();
        self.routes.push((name, handler));
        self
    }

    /// Handler for text that is not a command.
    pub fn fallback(mut self, handler: Arc<dyn Handler>) -> Self {
        self.fallback = Some(handler);
        self
    }

    /// Registered command names in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(name, _)| name.as_str())
    }

    fn route(&self, name: &str) -> Option<&Arc<dyn Handler>> {
        self.routes
            .iter()
            .find(|(registered, _)| registered == name)
            .map(|(_, handler)| handler)
    }
}

#[async_trait]
impl Handler for CommandRouter {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.as_str();
        if text.is_empty() {
            debug!(chat_id = message.chat.id, "Non-text message, ignored");
            return Ok(HandlerResponse::Ignore);
        }

        if !is_command(text) {
            return match &self.fallback {
                Some(handler) => handler.handle(message).await,
                None => Ok(HandlerResponse::Ignore),
            };
        }

        let Some(command) = parse_command(text) else {
            return Ok(HandlerResponse::Ignore);
        };

        let bot_username = self.bot_username.read().await.clone();
        if !command.is_addressed_to(bot_username.as_deref()) {
            debug!(command = %command.name, target = ?command.bot_name, "Command for another bot, ignored");
            return Ok(HandlerResponse::Ignore);
        }

        match self.route(command.name) {
            Some(handler) => {
                info!(
                    user_id = ?message.user_id(),
                    chat_id = message.chat.id,
                    command = %command.name,
                    "Dispatching command"
                );
                handler.handle(message).await
            }
            None => {
                debug!(command = %command.name, "Unregistered command, ignored");
                Ok(HandlerResponse::Ignore)
            }
        }
    }
}
