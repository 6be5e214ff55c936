//! Test doubles shared by the ai-chat integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Bot, Chat, Message, MessageDirection, Result, TextFormat, User};
use std::sync::Mutex;

/// One outbound call seen by [`MockBot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        chat_id: i64,
        text: String,
        format: TextFormat,
    },
    Typing {
        chat_id: i64,
    },
}

/// Bot that records every outbound call in order.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
}

impl MockBot {
    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts only, typing indicators skipped.
    pub fn texts(&self) -> Vec<(String, TextFormat)> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, format, .. } => Some((text, format)),
                Sent::Typing { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_formatted(&self, chat: &Chat, text: &str, format: TextFormat) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
            format,
        });
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Typing { chat_id: chat.id });
        Ok(())
    }
}

/// Private-chat text message from `user_id` (chat id equals user id, as in Telegram).
pub fn text_message(user_id: Option<i64>, content: &str) -> Message {
    let chat_id = user_id.unwrap_or(-100);
    Message {
        id: "1".to_string(),
        user: user_id.map(|id| User {
            id,
            username: Some("tester".to_string()),
            first_name: None,
            last_name: None,
        }),
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}
