//! BotConfig: Telegram + log file + AI settings. Use load() for env-based loading.

use dbot_core::ConfigError;
use dbot_telegram::TelegramConfig;
use std::env;

use super::AiConfig;

/// Log file used when `LOG_FILE` is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/telegram-bot.log";

/// Full application config.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
    pub ai: AiConfig,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides TELEGRAM_BOT_TOKEN / BOT_TOKEN.
    /// A missing token is fatal ([`ConfigError::MissingVar`]).
    pub fn load(token: Option<String>) -> Result<Self, ConfigError> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file = env::var("LOG_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let ai = AiConfig::from_env()?;
        Ok(Self {
            telegram,
            log_file,
            ai,
        })
    }

    /// Checks values that parse lazily (API URL). Call after load() to fail before connecting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.telegram.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }

    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram.telegram_api_url.as_deref()
    }
}
