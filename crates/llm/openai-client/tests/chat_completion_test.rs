//! Tests for [`openai_client::OpenAIClient::chat_completion`] against a mocked HTTP endpoint.
//!
//! The mock server stands in for `/chat/completions`; no real provider is contacted.

use openai_client::{
    classify_error, ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CompletionParams, ErrorKind, OpenAIClient,
};

fn user_message(text: &str) -> Vec<ChatCompletionRequestMessage> {
    vec![ChatCompletionRequestUserMessageArgs::default()
        .content(text)
        .build()
        .unwrap()
        .into()]
}

fn client_for(server: &mockito::ServerGuard) -> OpenAIClient {
    OpenAIClient::with_base_url("sk-test-key-0000000000".to_string(), server.url())
}

/// **Test: a successful completion returns the first choice's text.**
#[tokio::test]
async fn chat_completion_returns_first_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1706529600,
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Rust is a systems language."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 6, "total_tokens": 18}
        }"#,
        )
        .create_async()
        .await;

    let reply = client_for(&server)
        .chat_completion(&CompletionParams::default(), user_message("What is Rust?"))
        .await
        .unwrap();

    assert_eq!(reply.as_deref(), Some("Rust is a systems language."));
    mock.assert_async().await;
}

/// **Test: an empty assistant message is reported as `None`.**
#[tokio::test]
async fn chat_completion_without_content_is_none() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "id": "chatcmpl-2",
            "object": "chat.completion",
            "created": 1706529600,
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": ""},
                "finish_reason": "stop"
            }]
        }"#,
        )
        .create_async()
        .await;

    let reply = client_for(&server)
        .chat_completion(&CompletionParams::default(), user_message("?"))
        .await
        .unwrap();

    assert!(reply.is_none());
}

/// **Test: HTTP 401 with `invalid_api_key` is classified as an auth failure.**
#[tokio::test]
async fn invalid_api_key_is_auth_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {
                "message": "Incorrect API key provided: sk-test***0000.",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }}"#,
        )
        .create_async()
        .await;

    let err = client_for(&server)
        .chat_completion(&CompletionParams::default(), user_message("hi"))
        .await
        .unwrap_err();

    assert_eq!(classify_error(&err), ErrorKind::Auth);
}

/// **Test: HTTP 429 with `insufficient_quota` is classified as a quota failure (not retried).**
#[tokio::test]
async fn insufficient_quota_is_quota_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {
                "message": "You exceeded your current quota, please check your plan and billing details.",
                "type": "insufficient_quota",
                "param": null,
                "code": "insufficient_quota"
            }}"#,
        )
        .create_async()
        .await;

    let err = client_for(&server)
        .chat_completion(&CompletionParams::default(), user_message("hi"))
        .await
        .unwrap_err();

    assert_eq!(classify_error(&err), ErrorKind::Quota);
}

/// **Test: any other API error is `Other`.**
#[tokio::test]
async fn unknown_api_error_is_other() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {
                "message": "The model `gpt-9` does not exist",
                "type": "invalid_request_error",
                "param": null,
                "code": "model_not_found"
            }}"#,
        )
        .create_async()
        .await;

    let err = client_for(&server)
        .chat_completion(&CompletionParams::default(), user_message("hi"))
        .await
        .unwrap_err();

    assert_eq!(classify_error(&err), ErrorKind::Other);
}
