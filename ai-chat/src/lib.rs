//! # ai-chat
//!
//! The `/ai` conversation feature: a [`ConversationTracker`] that enforces a per-user cooldown,
//! keeps a bounded per-user [`Transcript`] and asks a [`ResponseGenerator`] (offline mock or an
//! OpenAI-compatible provider) for replies, plus the [`AskHandler`] and [`ClearHandler`] that wire it
//! into the handler chain.

pub mod error;
pub mod generator;
pub mod handlers;
pub mod messages;
pub mod store;
pub mod tracker;
pub mod transcript;

pub use error::ChatError;
pub use generator::{
    GenerationError, MockGenerator, OpenAiGenerator, OpenAiSettings, ResponseGenerator,
};
pub use handlers::{AskHandler, ClearHandler};
pub use store::{InMemorySessionStore, SessionStore, UserSession};
pub use tracker::{ConversationTracker, TrackerConfig};
pub use transcript::{Role, Transcript, Turn};
