//! Deterministic offline generator: keyword rules with an echoing fallback.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use super::{GenerationError, ResponseGenerator};
use crate::transcript::Turn;

/// Reply for questions about haiku.
pub const HAIKU_REPLY: &str = "📝 Here's a coding haiku:\n\n\
*Code compiles at last\n\
No errors, warnings, nothing\n\
Time for deploy... wait*";

const BLOCKCHAIN_REPLY: &str = "🔗 **Blockchain** is a distributed ledger technology that records \
transactions across multiple computers in a secure, transparent, and tamper-resistant way.\n\n\
Key features:\n\
• Decentralized - No single authority\n\
• Immutable - Records can't be changed\n\
• Transparent - All transactions are visible\n\
• Secure - Cryptographically protected";

const QUANTUM_REPLY: &str = "⚛️ **Quantum computing** uses quantum mechanical phenomena like \
superposition and entanglement to perform calculations.\n\n\
Unlike classical computers that use bits (0 or 1), quantum computers use qubits that can be in \
multiple states simultaneously.";

const GREETING_REPLY: &str = "👋 Hello! How can I help you today?";

/// Ordered `(keywords, reply)` rules over the lower-cased question; first hit wins.
/// `haiku` comes first: "hi" is a substring of many words.
const RULES: &[(&[&str], &str)] = &[
    (&["haiku"], HAIKU_REPLY),
    (&["blockchain"], BLOCKCHAIN_REPLY),
    (&["quantum"], QUANTUM_REPLY),
    (&["hello", "hi"], GREETING_REPLY),
];

/// Fallback reply; contains the question verbatim.
pub fn fallback_reply(question: &str) -> String {
    format!(
        "🤖 I understand you're asking about: \"{}\"\n\n\
         **This is a mock response** for demo purposes.\n\n\
         To get real AI responses:\n\
         1. Get an OpenAI API key at https://platform.openai.com/\n\
         2. Add it to your `.env` file: `OPENAI_API_KEY=sk-...`\n\
         3. Restart the bot",
        question
    )
}

/// Mock generator. Ignores the history.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    delay: Option<Duration>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleeps for `delay` before answering, to behave like a remote call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = (!delay.is_zero()).then_some(delay);
        self
    }

    /// The reply for `question`, without delay.
    pub fn reply_for(question: &str) -> String {
        let lower = question.to_lowercase();
        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, reply)| reply.to_string())
            .unwrap_or_else(|| fallback_reply(question))
    }
}

#[async_trait]
impl ResponseGenerator for MockGenerator {
    async fn generate(&self, question: &str, history: &[Turn]) -> Result<String, GenerationError> {
        if let Some(delay) = self.delay {
            debug!(delay_ms = delay.as_millis() as u64, "Mock generator delay");
            tokio::time::sleep(delay).await;
        }
        info!(history_len = history.len(), "Using mock AI response");
        Ok(Self::reply_for(question))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
