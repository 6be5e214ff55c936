//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], message and user types, command-token
//! parsing and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain and ai-chat.

pub mod bot;
pub mod command;
pub mod config;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, TextFormat};
pub use command::{is_command, parse_command, ParsedCommand, COMMAND_PREFIX};
pub use config::{env_parse, first_env, ConfigError};
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage, ToCoreUser, User,
};
