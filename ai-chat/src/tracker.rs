//! Conversational state tracker: per-user cooldown and transcript around a [`ResponseGenerator`].
//!
//! A question is handled as one check-then-act sequence under the user's session lock:
//! parse, cooldown check, generate, append to the transcript, stamp the acceptance time.
//! Rejections and generation failures leave the session as it was.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::error::{ChatError, GenerationError};
use crate::generator::ResponseGenerator;
use crate::store::{InMemorySessionStore, SessionStore};
use crate::transcript::{Turn, DEFAULT_MAX_TURNS};

/// Command name whose token [`ConversationTracker::parse_question`] strips.
pub const ASK_COMMAND: &str = "ai";

/// Tunables of the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Minimum time between two accepted questions of one user.
    pub cooldown: Duration,
    /// Transcript cap in turns.
    pub max_turns: usize,
    /// Upper bound for one generation call.
    pub generation_timeout: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_millis(2000),
            max_turns: DEFAULT_MAX_TURNS,
            generation_timeout: Duration::from_secs(30),
        }
    }
}

/// Owns the session store and the generator. Cheap to share behind an `Arc`.
pub struct ConversationTracker {
    store: Arc<dyn SessionStore>,
    generator: Arc<dyn ResponseGenerator>,
    config: TrackerConfig,
}

impl ConversationTracker {
    /// Tracker with a fresh [`InMemorySessionStore`].
    pub fn new(generator: Arc<dyn ResponseGenerator>, config: TrackerConfig) -> Self {
        let store = Arc::new(InMemorySessionStore::new(config.max_turns));
        Self::with_store(store, generator, config)
    }

    pub fn with_store(
        store: Arc<dyn SessionStore>,
        generator: Arc<dyn ResponseGenerator>,
        config: TrackerConfig,
    ) -> Self {
        Self {
            store,
            generator,
            config,
        }
    }

    /// Removes a leading `/ai` (or `/ai@botname`) token and trims the rest. Text without that
    /// token is only trimmed.
    pub fn parse_question(raw_text: &str) -> &str {
        match dbot_core::parse_command(raw_text) {
            Some(cmd) if cmd.name == ASK_COMMAND => cmd.args,
            _ => raw_text.trim(),
        }
    }

    /// Answers `raw_text` for `user_id`. See [`Self::handle_question_with`].
    pub async fn handle_question(&self, user_id: i64, raw_text: &str) -> Result<String, ChatError> {
        self.handle_question_with(user_id, raw_text, || async {}).await
    }

    /// Answers `raw_text` for `user_id`, calling `on_accepted` once the question passed the empty
    /// and cooldown checks and before generation starts.
    ///
    /// Errors: [`ChatError::EmptyQuestion`], [`ChatError::RateLimited`] (wait rounded up to whole
    /// seconds, at least 1), [`ChatError::GenerationFailed`] (including timeout).
    #[instrument(skip(self, raw_text, on_accepted))]
    pub async fn handle_question_with<F, Fut>(
        &self,
        user_id: i64,
        raw_text: &str,
        on_accepted: F,
    ) -> Result<String, ChatError>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = ()> + Send,
    {
        let question = Self::parse_question(raw_text);
        if question.is_empty() {
            debug!(user_id, "Empty question");
            return Err(ChatError::EmptyQuestion);
        }

        let session = self.store.session(user_id);
        let mut session = session.lock().await;

        if let Some(last) = session.last_accepted {
            let elapsed = last.elapsed();
            if elapsed < self.config.cooldown {
                let wait_secs = ceil_secs(self.config.cooldown - elapsed);
                info!(user_id, wait_secs, "Question rate limited");
                return Err(ChatError::RateLimited { wait_secs });
            }
        }

        on_accepted().await;

        info!(
            user_id,
            generator = self.generator.name(),
            history_len = session.transcript.len(),
            question = %preview(question),
            "AI request"
        );

        let reply = tokio::time::timeout(
            self.config.generation_timeout,
            self.generator.generate(question, session.transcript.turns()),
        )
        .await
        .map_err(|_| GenerationError::Timeout(self.config.generation_timeout))
        .and_then(|result| result)
        .inspect_err(|e| warn!(user_id, error = %e, "Generation failed"))?;

        let evicted = session.transcript.push_exchange(question, reply.as_str());
        session.last_accepted = Some(Instant::now());
        info!(
            user_id,
            transcript_len = session.transcript.len(),
            evicted,
            reply_len = reply.len(),
            "AI response ready"
        );
        Ok(reply)
    }

    /// Forgets the transcript and cooldown of `user_id`. Idempotent.
    pub fn clear(&self, user_id: i64) {
        let existed = self.store.remove(user_id);
        info!(user_id, existed, "Conversation cleared");
    }

    /// Snapshot of the user's transcript; empty for unknown users.
    pub async fn transcript(&self, user_id: i64) -> Vec<Turn> {
        match self.store.get(user_id) {
            Some(session) => session.lock().await.transcript.turns().to_vec(),
            None => Vec::new(),
        }
    }

    /// When the user's last question was accepted.
    pub async fn last_accepted(&self, user_id: i64) -> Option<Instant> {
        match self.store.get(user_id) {
            Some(session) => session.lock().await.last_accepted,
            None => None,
        }
    }
}

fn ceil_secs(remaining: Duration) -> u64 {
    let secs = remaining.as_nanos().div_ceil(1_000_000_000);
    u64::try_from(secs).unwrap_or(u64::MAX).max(1)
}

/// First 50 characters, for logs.
fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(50).collect();
    if out.len() < text.len() {
        out.push_str("...");
    }
    out
}
