//! Thin adapter onto the LLM completion service.
//!
//! One call per advisor per run, no retries: a failed call fails that
//! advisor's result and the pipeline moves on. Retry policy, if ever
//! wanted, belongs in a decorator around [`CompletionBackend`], not here.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("completion request timed out after {timeout_ms}ms")]
    UpstreamTimeout { timeout_ms: u64 },
}

/// Seam between the pipeline and the completion service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send one (instructions, message) pair and return the raw response
    /// text. No state is retained between calls.
    async fn complete(
        &self,
        instructions: &str,
        message: &str,
    ) -> std::result::Result<String, CompletionError>;
}

/// reqwest-backed client for an OpenAI-style chat completions endpoint.
pub struct ChatCompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl ChatCompletionClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionBackend for ChatCompletionClient {
    async fn complete(
        &self,
        instructions: &str,
        message: &str,
    ) -> std::result::Result<String, CompletionError> {
        let request = ChatRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instructions,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
        };

        debug!(model = %self.model, message_len = message.len(), "Sending completion request");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::UpstreamTimeout {
                        timeout_ms: self.timeout.as_millis() as u64,
                    }
                } else {
                    error!(error = %e, "Completion request failed");
                    CompletionError::UpstreamUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Completion service returned non-success status");
            return Err(CompletionError::UpstreamUnavailable(format!(
                "completion service returned {}",
                status
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::UpstreamUnavailable(e.to_string()))?;

        Ok(body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_defaults() {
        let client = ChatCompletionClient::new("http://localhost:1234", "sk-test");
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[test]
    fn test_client_builders() {
        let client = ChatCompletionClient::new("http://localhost:1234/", "sk-test")
            .with_model("gpt-4o-mini")
            .with_max_tokens(512)
            .with_timeout(Duration::from_secs(5));

        assert_eq!(client.model(), "gpt-4o-mini");
        assert_eq!(client.max_tokens, 512);
        assert_eq!(client.timeout, Duration::from_secs(5));
        // Trailing slash must not double up in the endpoint.
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o",
                "messages": [
                    { "role": "system", "content": "You are Ada, CTO." },
                    { "role": "user", "content": "Startup idea: a thing" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "message": { "content": "**Technical Assessment: GREEN**" } }
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = ChatCompletionClient::new(mock_server.uri(), "sk-test");
        let output = client
            .complete("You are Ada, CTO.", "Startup idea: a thing")
            .await
            .unwrap();

        assert_eq!(output, "**Technical Assessment: GREEN**");
    }

    #[tokio::test]
    async fn test_complete_maps_server_error_to_unavailable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = ChatCompletionClient::new(mock_server.uri(), "sk-test");
        let result = client.complete("sys", "msg").await;

        match result {
            Err(CompletionError::UpstreamUnavailable(reason)) => {
                assert!(reason.contains("500"));
            }
            other => panic!("Expected UpstreamUnavailable, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_complete_maps_slow_response_to_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_millis(500))
                    .set_body_json(json!({ "choices": [] })),
            )
            .mount(&mock_server)
            .await;

        let client = ChatCompletionClient::new(mock_server.uri(), "sk-test")
            .with_timeout(Duration::from_millis(50));
        let result = client.complete("sys", "msg").await;

        assert!(matches!(
            result,
            Err(CompletionError::UpstreamTimeout { timeout_ms: 50 })
        ));
    }

    #[tokio::test]
    async fn test_complete_tolerates_empty_choices() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&mock_server)
            .await;

        let client = ChatCompletionClient::new(mock_server.uri(), "sk-test");
        let output = client.complete("sys", "msg").await.unwrap();

        assert_eq!(output, "");
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        // Nothing listens on this port.
        let client = ChatCompletionClient::new("http://127.0.0.1:1", "sk-test");
        let result = client.complete("sys", "msg").await;

        assert!(matches!(
            result,
            Err(CompletionError::UpstreamUnavailable(_))
        ));
    }
}
