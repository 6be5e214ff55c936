//! Component factory: builds the generator, tracker and handler chain from config.
//! Transport-free, so tests assemble the same chain around a mock bot.

use ai_chat::{
    AskHandler, ClearHandler, ConversationTracker, MockGenerator, OpenAiGenerator,
    ResponseGenerator,
};
use dbot_core::Bot;
use handler_chain::{CommandRouter, HandlerChain};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::AiConfig;
use crate::handlers::{HelloHandler, LoggingHandler, UnknownTextHandler};

/// Everything the dispatcher needs besides the transport.
#[derive(Clone)]
pub struct BotComponents {
    pub tracker: Arc<ConversationTracker>,
    /// Own username, filled by the runner from `getMe`.
    pub bot_username: Arc<RwLock<Option<String>>>,
    pub handler_chain: HandlerChain,
}

/// OpenAI when a key is configured, mock otherwise.
pub fn build_generator(config: &AiConfig) -> Arc<dyn ResponseGenerator> {
    match &config.openai {
        Some(settings) => {
            let generator = OpenAiGenerator::new(settings.clone());
            info!(model = %generator.model(), base_url = ?settings.base_url, "Using OpenAI generator");
            Arc::new(generator)
        }
        None => {
            info!(
                delay_ms = config.mock_delay.as_millis() as u64,
                "OPENAI_API_KEY not set, using mock generator"
            );
            Arc::new(MockGenerator::new().with_delay(config.mock_delay))
        }
    }
}

/// Chain: `[LoggingHandler, CommandRouter]` with `/hello`, `/start`, `/ai`, `/clear` and the
/// unrecognized-text fallback.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    tracker: Arc<ConversationTracker>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    let hello = Arc::new(HelloHandler::new(bot.clone()));
    let router = CommandRouter::new(bot_username)
        .command("hello", hello.clone())
        .command("start", hello)
        .command("ai", Arc::new(AskHandler::new(bot.clone(), tracker.clone())))
        .command("clear", Arc::new(ClearHandler::new(bot.clone(), tracker)))
        .fallback(Arc::new(UnknownTextHandler::new(bot)));

    info!(commands = ?router.commands().collect::<Vec<_>>(), "Command router ready");

    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(router))
}

/// Builds all components around `bot`.
pub fn build_bot_components(bot: Arc<dyn Bot>, config: &AiConfig) -> BotComponents {
    let generator = build_generator(config);
    let tracker = Arc::new(ConversationTracker::new(generator, config.tracker.clone()));
    let bot_username = Arc::new(RwLock::new(None));
    let handler_chain = build_handler_chain(bot, tracker.clone(), bot_username.clone());
    BotComponents {
        tracker,
        bot_username,
        handler_chain,
    }
}
