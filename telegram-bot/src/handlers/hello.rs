//! `/hello` and `/start`.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result, User};
use std::sync::Arc;
use tracing::{info, instrument};

/// Greeting for `user`: username, else first name, else "there".
pub fn greeting(user: Option<&User>) -> String {
    let name = user.and_then(User::display_name).unwrap_or("there");
    format!(
        "👋 Hello, {}!\n\n\
         Welcome to this Telegram bot template. I'm up and running!\n\n\
         Available commands:\n\
         /hello - Get this welcome message\n\
         /start - Same as /hello\n\
         /ai <question> - Ask the AI anything\n\
         /clear - Clear your AI chat history",
        name
    )
}

pub struct HelloHandler {
    bot: Arc<dyn Bot>,
}

impl HelloHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for HelloHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = greeting(message.user.as_ref());
        info!(
            user = %message.user.as_ref().and_then(User::display_name).unwrap_or("there"),
            "Hello command received"
        );
        self.bot.reply_to(message, &text).await?;
        Ok(HandlerResponse::Reply(text))
    }
}
