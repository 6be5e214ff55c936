//! User-facing texts of the `/ai` feature. Markdown texts use Telegram legacy markup.

use dbot_core::TextFormat;

use crate::error::{ChatError, GenerationError};

pub const USAGE: &str = "🤖 *AI Chat Bot*\n\n\
Ask me anything!\n\n\
*Usage:*\n\
`/ai your question here`\n\n\
*Examples:*\n\
• `/ai Explain quantum computing simply`\n\
• `/ai Write a haiku about coding`\n\
• `/ai What is the meaning of life?`\n\n\
*Other commands:*\n\
• `/clear` - Clear chat history";

pub const CLEARED: &str = "🗑️ *Conversation Cleared*\n\n\
Your chat history has been reset.\n\n\
Start fresh with `/ai your question`";

pub const UNKNOWN_USER: &str = "❌ Unable to identify user.";

pub const AUTH_FAILED: &str = "❌ *Configuration Error*\n\n\
The AI provider rejected the API key.\n\n\
Please check `OPENAI_API_KEY` in your `.env` file.";

pub const QUOTA_EXCEEDED: &str = "❌ *API Quota Exceeded*\n\n\
The AI provider quota has been exceeded.\n\n\
Please check your provider account.";

pub const GENERATION_FAILED: &str = "❌ *Error*\n\n\
Sorry, I encountered an error processing your request.\n\n\
Please try again in a moment.";

pub fn rate_limited(wait_secs: u64) -> String {
    format!("⏱ Please wait {} more second(s) before asking again.", wait_secs)
}

/// Reply text and markup for a failed request.
pub fn reply_for_error(err: &ChatError) -> (String, TextFormat) {
    match err {
        ChatError::MissingIdentity => (UNKNOWN_USER.to_string(), TextFormat::Plain),
        ChatError::EmptyQuestion => (USAGE.to_string(), TextFormat::Markdown),
        ChatError::RateLimited { wait_secs } => (rate_limited(*wait_secs), TextFormat::Plain),
        ChatError::GenerationFailed(GenerationError::Auth) => {
            (AUTH_FAILED.to_string(), TextFormat::Markdown)
        }
        ChatError::GenerationFailed(GenerationError::Quota) => {
            (QUOTA_EXCEEDED.to_string(), TextFormat::Markdown)
        }
        ChatError::GenerationFailed(_) => (GENERATION_FAILED.to_string(), TextFormat::Markdown),
    }
}
