//! Error type for the bot core.
//!
//! Per-request conditions (rate limits, empty questions) are replies, not errors; what reaches
//! [`DbotError`] is a transport failure, which the runner logs and drops.

use thiserror::Error;

/// Top-level error for handlers and outbound bot calls.
#[derive(Error, Debug)]
pub enum DbotError {
    /// The transport refused or failed to deliver an outbound call.
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
