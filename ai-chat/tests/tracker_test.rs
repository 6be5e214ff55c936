//! ConversationTracker behaviour: cooldown, transcript cap, clear, empty questions, failures.

use ai_chat::{
    ChatError, ConversationTracker, GenerationError, MockGenerator, ResponseGenerator,
    TrackerConfig, Turn,
};
use ai_chat::generator::HAIKU_REPLY;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const USER: i64 = 42;

fn tracker() -> ConversationTracker {
    ConversationTracker::new(Arc::new(MockGenerator::new()), TrackerConfig::default())
}

/// Fails every call with the given cause and counts the calls.
struct FailingGenerator {
    calls: AtomicUsize,
    quota: bool,
}

impl FailingGenerator {
    fn new(quota: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            quota,
        }
    }
}

#[async_trait]
impl ResponseGenerator for FailingGenerator {
    async fn generate(&self, _question: &str, _history: &[Turn]) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.quota {
            Err(GenerationError::Quota)
        } else {
            Err(GenerationError::Unknown("provider down".to_string()))
        }
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Never answers within any sensible timeout.
struct StalledGenerator;

#[async_trait]
impl ResponseGenerator for StalledGenerator {
    async fn generate(&self, _question: &str, _history: &[Turn]) -> Result<String, GenerationError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("late".to_string())
    }

    fn name(&self) -> &'static str {
        "stalled"
    }
}

/// **Test: a second question inside the cooldown is rejected with the remaining wait.**
#[tokio::test(start_paused = true)]
async fn test_second_question_within_cooldown_is_rate_limited() {
    let tracker = tracker();
    tracker.handle_question(USER, "/ai hello").await.unwrap();

    tokio::time::advance(Duration::from_millis(500)).await;
    let err = tracker.handle_question(USER, "/ai hello again").await.unwrap_err();
    match err {
        ChatError::RateLimited { wait_secs } => assert_eq!(wait_secs, 2),
        other => panic!("expected RateLimited, got {other:?}"),
    }
    // Rejection did not touch the transcript.
    assert_eq!(tracker.transcript(USER).await.len(), 2);
}

/// **Test: the reported wait rounds up and never drops below one second.**
#[tokio::test(start_paused = true)]
async fn test_wait_is_at_least_one_second() {
    let tracker = tracker();
    tracker.handle_question(USER, "/ai hi").await.unwrap();

    tokio::time::advance(Duration::from_millis(1999)).await;
    let err = tracker.handle_question(USER, "/ai hi").await.unwrap_err();
    assert!(matches!(err, ChatError::RateLimited { wait_secs: 1 }));
}

/// **Test: a rejected question does not restart the cooldown.**
#[tokio::test(start_paused = true)]
async fn test_rejection_does_not_extend_cooldown() {
    let tracker = tracker();
    tracker.handle_question(USER, "/ai one").await.unwrap();
    let first = tracker.last_accepted(USER).await;

    tokio::time::advance(Duration::from_millis(1500)).await;
    assert!(tracker.handle_question(USER, "/ai two").await.is_err());
    assert_eq!(tracker.last_accepted(USER).await, first);

    tokio::time::advance(Duration::from_millis(500)).await;
    assert!(tracker.handle_question(USER, "/ai three").await.is_ok());
}

/// **Test: one user's cooldown never blocks another user.**
#[tokio::test(start_paused = true)]
async fn test_users_have_independent_cooldowns() {
    let tracker = tracker();
    tracker.handle_question(1, "/ai hello").await.unwrap();
    assert!(tracker.handle_question(2, "/ai hello").await.is_ok());
}

/// **Test: the transcript keeps only the most recent twenty turns.**
#[tokio::test(start_paused = true)]
async fn test_transcript_keeps_last_twenty_turns() {
    let tracker = tracker();
    for i in 1..=11 {
        tracker
            .handle_question(USER, &format!("/ai question {i}"))
            .await
            .unwrap();
        tokio::time::advance(Duration::from_secs(3)).await;
    }

    let transcript = tracker.transcript(USER).await;
    assert_eq!(transcript.len(), 20);
    assert_eq!(transcript[0], Turn::user("question 2"));
    assert!(!transcript.iter().any(|t| t.content == "question 1"));
    assert_eq!(transcript[18], Turn::user("question 11"));
}

/// **Test: clearing drops the transcript and lifts the cooldown.**
#[tokio::test(start_paused = true)]
async fn test_clear_resets_transcript_and_cooldown() {
    let tracker = tracker();
    tracker.handle_question(USER, "/ai first").await.unwrap();
    tokio::time::advance(Duration::from_secs(3)).await;
    tracker.handle_question(USER, "/ai second").await.unwrap();

    tracker.clear(USER);
    tracker.clear(USER);
    assert!(tracker.transcript(USER).await.is_empty());

    // No cooldown right after clear.
    tracker.handle_question(USER, "/ai third").await.unwrap();
    let transcript = tracker.transcript(USER).await;
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0], Turn::user("third"));
}

/// **Test: an empty question is rejected without touching transcript or cooldown.**
#[tokio::test(start_paused = true)]
async fn test_empty_question_leaves_state_unchanged() {
    let tracker = tracker();
    tracker.handle_question(USER, "/ai hello").await.unwrap();
    let before_turns = tracker.transcript(USER).await;
    let before_time = tracker.last_accepted(USER).await;

    let err = tracker.handle_question(USER, "/ai   ").await.unwrap_err();
    assert!(matches!(err, ChatError::EmptyQuestion));
    assert_eq!(tracker.transcript(USER).await, before_turns);
    assert_eq!(tracker.last_accepted(USER).await, before_time);
}

/// **Test: an empty question from a new user creates no session.**
#[tokio::test]
async fn test_empty_question_for_new_user_creates_no_session() {
    let tracker = tracker();
    assert!(matches!(
        tracker.handle_question(7, "/ai@my_bot").await,
        Err(ChatError::EmptyQuestion)
    ));
    assert!(tracker.last_accepted(7).await.is_none());
}

/// **Test: the offline generator answers the haiku prompt and echoes anything else.**
#[tokio::test]
async fn test_mock_answers_haiku_and_echoes_unknown() {
    let tracker = tracker();
    assert_eq!(
        tracker.handle_question(1, "/ai Write a haiku about coding").await.unwrap(),
        HAIKU_REPLY
    );
    let reply = tracker
        .handle_question(2, "/ai What is the meaning of life?")
        .await
        .unwrap();
    assert!(reply.contains("\"What is the meaning of life?\""));
}

/// **Test: a failed generation records neither turns nor cooldown.**
#[tokio::test]
async fn test_generation_failure_leaves_state_unchanged() {
    let generator = Arc::new(FailingGenerator::new(true));
    let tracker = ConversationTracker::new(generator.clone(), TrackerConfig::default());

    let err = tracker.handle_question(USER, "/ai anything").await.unwrap_err();
    assert!(matches!(err, ChatError::GenerationFailed(GenerationError::Quota)));
    assert!(tracker.transcript(USER).await.is_empty());
    assert!(tracker.last_accepted(USER).await.is_none());

    // Not rate limited after a failure: the generator is called again.
    let err = tracker.handle_question(USER, "/ai anything").await.unwrap_err();
    assert!(matches!(err, ChatError::GenerationFailed(GenerationError::Quota)));
    assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
}

/// **Test: a generator slower than the timeout fails with `Timeout`.**
#[tokio::test(start_paused = true)]
async fn test_generation_timeout() {
    let config = TrackerConfig {
        generation_timeout: Duration::from_secs(5),
        ..TrackerConfig::default()
    };
    let tracker = ConversationTracker::new(Arc::new(StalledGenerator), config);

    let err = tracker.handle_question(USER, "/ai slow").await.unwrap_err();
    match err {
        ChatError::GenerationFailed(GenerationError::Timeout(d)) => {
            assert_eq!(d, Duration::from_secs(5))
        }
        other => panic!("expected Timeout, got {other:?}"),
    }
    assert!(tracker.transcript(USER).await.is_empty());
}

/// **Test: concurrent questions of one user are serialized, so only one is accepted.**
#[tokio::test(start_paused = true)]
async fn test_concurrent_questions_of_one_user_are_serialized() {
    let generator = MockGenerator::new().with_delay(Duration::from_millis(1500));
    let tracker = Arc::new(ConversationTracker::new(
        Arc::new(generator),
        TrackerConfig::default(),
    ));

    let a = tokio::spawn({
        let tracker = tracker.clone();
        async move { tracker.handle_question(USER, "/ai one").await }
    });
    let b = tokio::spawn({
        let tracker = tracker.clone();
        async move { tracker.handle_question(USER, "/ai two").await }
    });
    let results = [a.await.unwrap(), b.await.unwrap()];

    let accepted = results.iter().filter(|r| r.is_ok()).count();
    let limited = results
        .iter()
        .filter(|r| matches!(r, Err(ChatError::RateLimited { .. })))
        .count();
    assert_eq!((accepted, limited), (1, 1));
    assert_eq!(tracker.transcript(USER).await.len(), 2);
}

/// **Test: the typing hook runs only after a question passes the checks.**
#[tokio::test]
async fn test_typing_hook_runs_only_for_accepted_questions() {
    let tracker = tracker();
    let counter = AtomicUsize::new(0);
    let hooks = &counter;

    let _ = tracker
        .handle_question_with(USER, "/ai ", move || async move {
            hooks.fetch_add(1, Ordering::SeqCst);
        })
        .await;
    assert_eq!(hooks.load(Ordering::SeqCst), 0);

    tracker
        .handle_question_with(USER, "/ai hello", move || async move {
            hooks.fetch_add(1, Ordering::SeqCst);
        })
        .await
        .unwrap();
    let generator = Arc::new(FailingGenerator::new(false));
    let failing = ConversationTracker::new(generator, TrackerConfig::default());
    let err = failing
        .handle_question_with(USER, "/ai hello", move || async move {
            hooks.fetch_add(1, Ordering::SeqCst);
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::GenerationFailed(GenerationError::Unknown(_))));
    // Fired for both accepted questions, including the one whose generation failed.
    assert_eq!(hooks.load(Ordering::SeqCst), 2);
}
