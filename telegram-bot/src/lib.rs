//! # Telegram starter bot
//!
//! Wires dbot-core, handler-chain, dbot-telegram and ai-chat into the application: config from
//! env, `/hello` `/start` `/ai` `/clear` plus the unrecognized-text reply, and the runner.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_generator, build_handler_chain, BotComponents};
pub use config::{AiConfig, BotConfig};
pub use handlers::{HelloHandler, LoggingHandler, UnknownTextHandler};
pub use runner::run_bot;
