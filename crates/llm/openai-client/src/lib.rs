//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for non-streaming chat completion against OpenAI or any
//! compatible endpoint. Provides token masking for safe logging and a coarse classification of
//! provider errors so callers can tailor user-facing messages.

use async_openai::{config::OpenAIConfig, error::OpenAIError, types::CreateChatCompletionRequestArgs, Client};
use std::sync::Arc;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// Coarse category of a failed completion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing, invalid or revoked API key.
    Auth,
    /// Account quota or billing limit exhausted.
    Quota,
    Other,
}

/// Classifies an error returned by [`OpenAIClient::chat_completion`].
pub fn classify_error(err: &anyhow::Error) -> ErrorKind {
    match err.downcast_ref::<OpenAIError>() {
        Some(OpenAIError::ApiError(api)) => {
            // `code` is free-form across compatible providers; Debug covers every shape.
            let code = format!("{:?}", api.code);
            let kind = api.r#type.as_deref().unwrap_or_default();
            if code.contains("invalid_api_key") || api.message.contains("API key") {
                ErrorKind::Auth
            } else if kind == "insufficient_quota"
                || code.contains("insufficient_quota")
                || api.message.contains("quota")
            {
                ErrorKind::Quota
            } else {
                ErrorKind::Other
            }
        }
        _ => classify_message(&err.to_string()),
    }
}

fn classify_message(message: &str) -> ErrorKind {
    if message.contains("API key") {
        ErrorKind::Auth
    } else if message.contains("quota") {
        ErrorKind::Quota
    } else {
        ErrorKind::Other
    }
}

/// OpenAI chat client. Wraps async-openai client; holds the API key only for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<OpenAIConfig>>,
    api_key_for_logging: String,
}

impl OpenAIClient {
    /// Builds a client using the given API key and default API base URL.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client with a custom base URL (e.g. for proxies or compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            api_key_for_logging: api_key,
        }
    }

    /// Sends a chat completion request and returns the first choice's content.
    ///
    /// `Ok(None)` means the provider answered without text. Logs masked API key and token usage;
    /// the full request JSON is logged at debug level.
    #[allow(deprecated)]
    pub async fn chat_completion(
        &self,
        params: &CompletionParams,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> anyhow::Result<Option<String>> {
        tracing::info!(
            model = %params.model,
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key_for_logging),
            "OpenAI chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(params.model.as_str())
            .messages(messages)
            .max_tokens(params.max_tokens)
            .temperature(params.temperature)
            .build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        match response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content.filter(|c| !c.trim().is_empty())),
            None => anyhow::bail!("No response from OpenAI"),
        }
    }
}
