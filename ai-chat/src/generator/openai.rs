//! Generator backed by an OpenAI-compatible chat-completion endpoint.

use async_trait::async_trait;
use openai_client::{
    classify_error, ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    mask_token, CompletionParams, ErrorKind, OpenAIClient,
};
use std::fmt;
use tracing::{error, info, instrument};

use super::{GenerationError, ResponseGenerator};
use crate::transcript::{Role, Turn};

/// System prompt used when none is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful, friendly, and knowledgeable assistant. \
Provide clear, accurate answers. Use emojis occasionally to be engaging. \
Keep responses concise but informative.";

/// Reply when the provider answers without text.
pub const EMPTY_COMPLETION_REPLY: &str = "Sorry, I couldn't generate a response.";

/// Provider settings read from the environment by the app.
#[derive(Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
    pub system_prompt: Option<String>,
}

impl OpenAiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            model: CompletionParams::default().model,
            system_prompt: None,
        }
    }
}

impl fmt::Debug for OpenAiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiSettings")
            .field("api_key", &mask_token(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt)
            .finish()
    }
}

/// Sends system prompt + history + question; maps provider failures to [`GenerationError`].
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: OpenAIClient,
    params: CompletionParams,
    system_prompt: String,
}

impl OpenAiGenerator {
    pub fn new(settings: OpenAiSettings) -> Self {
        let client = match settings.base_url {
            Some(base_url) => OpenAIClient::with_base_url(settings.api_key, base_url),
            None => OpenAIClient::new(settings.api_key),
        };
        Self {
            client,
            params: CompletionParams {
                model: settings.model,
                ..CompletionParams::default()
            },
            system_prompt: settings
                .system_prompt
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        }
    }

    pub fn model(&self) -> &str {
        &self.params.model
    }

    fn build_messages(
        &self,
        question: &str,
        history: &[Turn],
    ) -> anyhow::Result<Vec<ChatCompletionRequestMessage>> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(system_message(&self.system_prompt)?);
        for turn in history {
            messages.push(match turn.role {
                Role::System => system_message(&turn.content)?,
                Role::User => user_message(&turn.content)?,
                Role::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
                    .content(turn.content.clone())
                    .build()?
                    .into(),
            });
        }
        messages.push(user_message(question)?);
        Ok(messages)
    }
}

fn system_message(content: &str) -> anyhow::Result<ChatCompletionRequestMessage> {
    Ok(ChatCompletionRequestSystemMessageArgs::default()
        .content(content.to_string())
        .build()?
        .into())
}

fn user_message(content: &str) -> anyhow::Result<ChatCompletionRequestMessage> {
    Ok(ChatCompletionRequestUserMessageArgs::default()
        .content(content.to_string())
        .build()?
        .into())
}

fn to_generation_error(err: anyhow::Error) -> GenerationError {
    match classify_error(&err) {
        ErrorKind::Auth => GenerationError::Auth,
        ErrorKind::Quota => GenerationError::Quota,
        ErrorKind::Other => GenerationError::Unknown(err.to_string()),
    }
}

#[async_trait]
impl ResponseGenerator for OpenAiGenerator {
    #[instrument(skip(self, question, history), fields(model = %self.params.model))]
    async fn generate(&self, question: &str, history: &[Turn]) -> Result<String, GenerationError> {
        let messages = self
            .build_messages(question, history)
            .map_err(|e| GenerationError::Unknown(e.to_string()))?;
        info!(message_count = messages.len(), "Calling OpenAI API");

        match self.client.chat_completion(&self.params, messages).await {
            Ok(Some(text)) => Ok(text),
            Ok(None) => Ok(EMPTY_COMPLETION_REPLY.to_string()),
            Err(e) => {
                error!(error = %e, "OpenAI API error");
                Err(to_generation_error(e))
            }
        }
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
