//! Per-user session storage with per-user mutual exclusion.
//!
//! A session holds the transcript and the time of the last accepted question. Callers lock one
//! user's session for the whole check-then-act sequence; other users are never blocked.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::transcript::{Transcript, DEFAULT_MAX_TURNS};

/// Conversation state of one user.
#[derive(Debug, Clone)]
pub struct UserSession {
    pub transcript: Transcript,
    /// When the last question was accepted; `None` until the first one.
    pub last_accepted: Option<Instant>,
}

impl UserSession {
    pub fn new(max_turns: usize) -> Self {
        Self {
            transcript: Transcript::new(max_turns),
            last_accepted: None,
        }
    }
}

/// Storage for [`UserSession`]s keyed by user id. Implement this to back sessions with something
/// other than process memory.
pub trait SessionStore: Send + Sync {
    /// Session for `user_id`, created empty on first use.
    fn session(&self, user_id: i64) -> Arc<Mutex<UserSession>>;

    /// Existing session for `user_id`; never creates one.
    fn get(&self, user_id: i64) -> Option<Arc<Mutex<UserSession>>>;

    /// Deletes the session. Returns whether one existed.
    fn remove(&self, user_id: i64) -> bool;
}

/// Process-memory session store. Sessions live until removed; there is no expiry.
#[derive(Debug)]
pub struct InMemorySessionStore {
    sessions: DashMap<i64, Arc<Mutex<UserSession>>>,
    max_turns: usize,
}

impl InMemorySessionStore {
    /// New sessions get transcripts capped at `max_turns`.
    pub fn new(max_turns: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            max_turns,
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}

impl SessionStore for InMemorySessionStore {
    fn session(&self, user_id: i64) -> Arc<Mutex<UserSession>> {
        // The shard guard is dropped at the end of the statement; callers lock the session after.
        self.sessions
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(UserSession::new(self.max_turns))))
            .clone()
    }

    fn get(&self, user_id: i64) -> Option<Arc<Mutex<UserSession>>> {
        self.sessions.get(&user_id).map(|r| r.clone())
    }

    fn remove(&self, user_id: i64) -> bool {
        self.sessions.remove(&user_id).is_some()
    }
}
