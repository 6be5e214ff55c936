//! Role-tagged conversation turns and the bounded per-user transcript.

/// Default transcript cap: 10 question/answer exchanges.
pub const DEFAULT_MAX_TURNS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered turns, never longer than `max_turns`; the oldest turns are dropped first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
    max_turns: usize,
}

impl Transcript {
    /// Creates an empty transcript. A cap below 2 is raised to 2 so one exchange always fits.
    pub fn new(max_turns: usize) -> Self {
        Self {
            turns: Vec::new(),
            max_turns: max_turns.max(2),
        }
    }

    /// Appends the user question and the assistant answer, then evicts from the front until the
    /// cap holds. Returns how many turns were evicted.
    pub fn push_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) -> usize {
        self.turns.push(Turn::user(question));
        self.turns.push(Turn::assistant(answer));
        let overflow = self.turns.len().saturating_sub(self.max_turns);
        self.turns.drain(..overflow);
        overflow
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TURNS)
    }
}
