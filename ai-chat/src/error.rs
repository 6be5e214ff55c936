//! Failure conditions of a `/ai` request.

use std::time::Duration;
use thiserror::Error;

/// Why a question was not answered. Every variant is turned into a chat reply by the handlers;
/// none of them stops the bot.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("update carries no user id")]
    MissingIdentity,

    #[error("no question after the command")]
    EmptyQuestion,

    #[error("rate limited, retry in {wait_secs}s")]
    RateLimited { wait_secs: u64 },

    #[error("generation failed: {0}")]
    GenerationFailed(#[from] GenerationError),
}

/// Failure of a [`crate::ResponseGenerator`], by cause.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Provider rejected the API key.
    #[error("provider authorization failed")]
    Auth,

    /// Provider quota or billing limit exhausted.
    #[error("provider quota exceeded")]
    Quota,

    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Unknown(String),
}
