//! Bot configuration: Telegram connectivity + log file ([`BotConfig`]) and the `/ai` feature
//! ([`AiConfig`]). Everything is read from the environment; load `.env` first.

mod ai;
mod bot_config;


pub use ai::{AiConfig, DEFAULT_MOCK_DELAY_MS};
pub use bot_config::{BotConfig, DEFAULT_LOG_FILE};
