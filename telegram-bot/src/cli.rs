//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "telegram-bot")]
#[command(about = "Telegram starter bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; --token overrides TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Loads BotConfig from the environment. If `token` is provided it overrides the env token.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    Ok(BotConfig::load(token)?)
}
