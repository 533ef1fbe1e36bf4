//! Client for the language-model completion API.
//!
//! Quiz generation only depends on [`CompletionClient`]; [`GroqClient`] talks to
//! any OpenAI-compatible `chat/completions` endpoint (Groq by default).

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::names;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("completion request timed out")]
    Timeout,

    #[error("completion API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("completion API returned no content")]
    EmptyCompletion,
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CompletionClient: Send + Sync {
    /// Sends `prompt` as a single user message and returns the raw completion text.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}

#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    /// Base URL without the trailing `/chat/completions`.
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
    /// Ask the API to constrain output to a JSON object.
    pub json_mode: bool,
}

impl GroqConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_url: names::DEFAULT_API_URL.to_string(),
            model: names::DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(names::DEFAULT_REQUEST_TIMEOUT_SECS),
            json_mode: false,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    r#type: &'static str,
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
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    config: GroqConfig,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("quizgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CompletionError::Http)?;

        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_url.trim_end_matches('/')
        )
    }
}

impl CompletionClient for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: self.config.json_mode.then_some(ResponseFormat {
                r#type: "json_object",
            }),
        };

        tracing::debug!(model = %self.config.model, "sending completion request");

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::error!("completion API error: {status} - {body}");
            return Err(CompletionError::Status { status, body });
        }

        let completion: ChatResponse = resp.json().await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let mut config = GroqConfig::new("key".to_string());
        config.api_url = "http://localhost:9999/v1/".to_string();
        let client = GroqClient::new(config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9999/v1/chat/completions");
    }

    #[test]
    fn request_serializes_single_user_message() {
        let body = ChatRequest {
            model: "m",
            messages: [ChatMessage {
                role: "user",
                content: "hello",
            }],
            response_format: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "m",
                "messages": [{ "role": "user", "content": "hello" }],
            })
        );
    }

    #[test]
    fn json_mode_adds_response_format() {
        let body = ChatRequest {
            model: "m",
            messages: [ChatMessage {
                role: "user",
                content: "hello",
            }],
            response_format: Some(ResponseFormat {
                r#type: "json_object",
            }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
    }
}
