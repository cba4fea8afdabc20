//! LLM client — the single point of entry for all chat-completion calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the model API directly.
//! All model interactions go through the `ChatModel` trait defined here.
//!
//! One request, one response: there is deliberately no retry, backoff, or
//! streaming in this client. A failed call aborts the whole analysis and is
//! surfaced to the end client as a 400 with the upstream message. Each call
//! consumes externally billed token quota, which is why the response usage
//! block is handed back to the caller for logging.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all analysis calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o-mini";
/// The only length cap applied anywhere in the pipeline (the prompt itself
/// is never truncated before submission).
const MAX_TOKENS: u32 = 2048;
const TEMPERATURE: f32 = 0.4;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Token counts billed for one call, as reported by the API.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// The raw text of a completion plus the usage billed for it.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: TokenUsage,
}

/// The model boundary. `AppState` carries an `Arc<dyn ChatModel>` so tests
/// can substitute a canned-output stub for the real client.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// One chat-completion round trip: a system message plus a single user
    /// message. Implementations must not retry.
    async fn complete(&self, system: &str, user: &str) -> Result<Completion, LlmError>;

    /// Model identifier recorded on analysis rows and usage logs.
    fn model_id(&self) -> &str;
}

/// reqwest-backed client for the OpenAI chat-completions API.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> Result<Completion, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the error body parses
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;
        let usage = chat.usage.unwrap_or_default();

        debug!(
            "chat completion ok: prompt_tokens={}, completion_tokens={}",
            usage.prompt_tokens, usage.completion_tokens
        );

        Ok(Completion {
            text: first_choice_text(chat),
            usage,
        })
    }

    fn model_id(&self) -> &str {
        MODEL
    }
}

/// Content of the first choice, or the empty string when the reply carried
/// none. A 2xx reply with missing or blank content is NOT a client error:
/// only transport faults and non-2xx statuses abort an analysis. Unusable
/// content is the normalizer's problem, and it absorbs the empty string by
/// taking its fallback path.
fn first_choice_text(chat: ChatResponse) -> String {
    chat.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serializes_system_and_user_roles() {
        let request = ChatRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "be precise",
                },
                ChatMessage {
                    role: "user",
                    content: "analyze this",
                },
            ],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "analyze this");
    }

    #[test]
    fn test_chat_response_deserializes_openai_shape() {
        let body = r#"{
            "id": "chatcmpl-abc",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "{\"ok\": true}"},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 812, "completion_tokens": 340, "total_tokens": 1152}
        }"#;

        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("{\"ok\": true}")
        );
        let usage = parsed.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 812);
        assert_eq!(usage.completion_tokens, 340);
    }

    #[test]
    fn test_chat_response_tolerates_missing_usage() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "hi"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.usage.is_none());
    }

    #[test]
    fn test_empty_choice_content_is_returned_not_rejected() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": ""}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(first_choice_text(parsed), "");
    }

    #[test]
    fn test_missing_content_and_missing_choices_yield_empty_text() {
        let no_content = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(no_content).unwrap();
        assert_eq!(first_choice_text(parsed), "");

        let no_choices = r#"{"choices": []}"#;
        let parsed: ChatResponse = serde_json::from_str(no_choices).unwrap();
        assert_eq!(first_choice_text(parsed), "");
    }

    #[test]
    fn test_error_body_parses_api_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let parsed: OpenAiError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "Incorrect API key provided");
    }
}
