//! # dbot-telegram
//!
//! Telegram layer: adapters, [`dbot_core::Bot`] implementation, connectivity config and the
//! dispatcher runner. Handles only Telegram connectivity and handler-chain execution; no AI logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{TelegramConfig, API_URL_VARS, BOT_TOKEN_VARS};
pub use runner::{process_message, run_dispatcher};
