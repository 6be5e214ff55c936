//! Main entry: init logging, validate config, build components around the Telegram adapter, then
//! run the dispatcher until SIGINT/SIGTERM.

use anyhow::Result;
use dbot_core::init_tracing;
use dbot_telegram::{run_dispatcher, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::components::build_bot_components;
use crate::config::BotConfig;

#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        log_file = %config.log_file,
        api_url = ?config.telegram_api_url(),
        generator = config.ai.generator_name(),
        cooldown_ms = config.ai.tracker.cooldown.as_millis() as u64,
        history_limit = config.ai.tracker.max_turns,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let adapter = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let components = build_bot_components(adapter, &config.ai);

    info!("Bot started successfully");
    run_dispatcher(teloxide_bot, components.handler_chain, components.bot_username).await
}
