//! Response generation: the [`ResponseGenerator`] capability and its two implementations.
//!
//! The tracker only sees the trait, so the offline [`MockGenerator`] and the provider-backed
//! [`OpenAiGenerator`] are interchangeable; the app picks one from configuration.

use async_trait::async_trait;

use crate::transcript::Turn;

mod mock;
mod openai;

pub use crate::error::GenerationError;
pub use mock::{fallback_reply, MockGenerator, HAIKU_REPLY};
pub use openai::{OpenAiGenerator, OpenAiSettings, DEFAULT_SYSTEM_PROMPT, EMPTY_COMPLETION_REPLY};

/// Produces the assistant reply for a question given the prior conversation.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// `history` holds the earlier turns of this user, oldest first, without the new question.
    async fn generate(&self, question: &str, history: &[Turn]) -> Result<String, GenerationError>;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}
