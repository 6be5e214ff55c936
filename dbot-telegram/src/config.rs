//! Telegram connectivity config: bot token and optional custom Bot API server.
//! Loaded from TELEGRAM_BOT_TOKEN (or BOT_TOKEN) and TELEGRAM_API_URL (or TELOXIDE_API_URL).

use dbot_core::{first_env, ConfigError};
use reqwest::Url;

/// Env names accepted for the bot token, in lookup order.
pub const BOT_TOKEN_VARS: &[&str] = &["TELEGRAM_BOT_TOKEN", "BOT_TOKEN"];
/// Env names accepted for a custom Bot API server, in lookup order.
pub const API_URL_VARS: &[&str] = &["TELEGRAM_API_URL", "TELOXIDE_API_URL"];

/// Minimal Telegram config (token + optional API URL).
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from the environment. `token` overrides the env token when given.
    /// A missing token is [`ConfigError::MissingVar`] naming `TELEGRAM_BOT_TOKEN`.
    pub fn from_env(token: Option<String>) -> Result<Self, ConfigError> {
        let bot_token = match token.filter(|t| !t.trim().is_empty()) {
            Some(t) => t,
            None => first_env(BOT_TOKEN_VARS)
                .map(|(_, v)| v)
                .ok_or(ConfigError::MissingVar(BOT_TOKEN_VARS[0]))?,
        };
        let telegram_api_url = first_env(API_URL_VARS).map(|(_, v)| v);
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds with the given token and the default API server.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Parsed custom API URL, if set. Fails when the value is not a URL.
    pub fn api_url(&self) -> Result<Option<Url>, ConfigError> {
        self.telegram_api_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).map_err(|_| ConfigError::InvalidUrl {
                    name: API_URL_VARS[0],
                    value: raw.to_string(),
                })
            })
            .transpose()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_url().map(|_| ())
    }

    /// Creates the teloxide Bot, pointing it at the custom API server when configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot, ConfigError> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        Ok(match self.api_url()? {
            Some(url) => bot.set_api_url(url),
            None => bot,
        })
    }
}
