use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::HttpClientTrait;
use crate::domain::{ChatProvider, ChatResponse, DomainError, Message, Usage};

/// Ollama chat backend adapter.
///
/// Performs a blocking (non-streaming) chat completion request against the
/// `/api/chat` endpoint of the host supplied per invocation.
#[derive(Debug)]
pub struct OllamaClient<C: HttpClientTrait> {
    client: C,
}

impl<C: HttpClientTrait> OllamaClient<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    fn chat_url(host: &str) -> String {
        format!("{}/api/chat", host.trim_end_matches('/'))
    }

    fn build_request(model: &str, messages: &[Message]) -> serde_json::Value {
        serde_json::json!({
            "model": model,
            "messages": messages,
            "stream": false,
        })
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<ChatResponse, DomainError> {
        let response: OllamaChatResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("ollama", format!("Failed to parse response: {}", e))
        })?;

        let mut chat_response = ChatResponse::new(response.message.content);

        if let Some(usage) = response.usage {
            chat_response = chat_response.with_usage(Usage::new(usage.total_tokens));
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl<C: HttpClientTrait> ChatProvider for OllamaClient<C> {
    async fn chat(
        &self,
        model: &str,
        host: &str,
        messages: Vec<Message>,
    ) -> Result<ChatResponse, DomainError> {
        let url = Self::chat_url(host);
        let body = Self::build_request(model, &messages);
        let response = self.client.post_json(&url, &body).await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }
}

// Ollama API types

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaMessage,
    /// Not reported by every Ollama build; missing means unknown, not an error.
    usage: Option<OllamaUsage>,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaUsage {
    #[serde(default)]
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageRole;
    use crate::infrastructure::http_client::mock::MockHttpClient;

    const TEST_URL: &str = "http://localhost:11434/api/chat";

    fn test_messages() -> Vec<Message> {
        vec![Message::user("Explain KubePodNotReady")]
    }

    #[tokio::test]
    async fn test_chat_parses_content_and_usage() {
        let mock_response = serde_json::json!({
            "model": "llama3",
            "message": {
                "role": "assistant",
                "content": "Root cause: ..."
            },
            "usage": {
                "total_tokens": 42
            }
        });

        let client = MockHttpClient::new().with_response(TEST_URL, mock_response);
        let provider = OllamaClient::new(client);

        let response = provider
            .chat("llama3", "http://localhost:11434", test_messages())
            .await
            .unwrap();

        assert_eq!(response.content, "Root cause: ...");
        assert_eq!(response.token_count(), 42);
    }

    #[tokio::test]
    async fn test_chat_missing_usage_is_not_an_error() {
        let mock_response = serde_json::json!({
            "model": "llama3",
            "message": { "role": "assistant", "content": "hi" }
        });

        let client = MockHttpClient::new().with_response(TEST_URL, mock_response);
        let provider = OllamaClient::new(client);

        let response = provider
            .chat("llama3", "http://localhost:11434", test_messages())
            .await
            .unwrap();

        assert!(response.usage.is_none());
        assert_eq!(response.token_count(), 0);
    }

    #[tokio::test]
    async fn test_chat_transport_error_surfaces() {
        let client = MockHttpClient::new().with_error(TEST_URL, "connection refused");
        let provider = OllamaClient::new(client);

        let result = provider
            .chat("llama3", "http://localhost:11434", test_messages())
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_chat_url_trims_trailing_slash() {
        let mock_response = serde_json::json!({
            "message": { "role": "assistant", "content": "hi" }
        });

        let client = MockHttpClient::new().with_response(TEST_URL, mock_response);
        let provider = OllamaClient::new(client);

        let response = provider
            .chat("llama3", "http://localhost:11434/", test_messages())
            .await
            .unwrap();

        assert_eq!(response.content, "hi");
    }

    #[test]
    fn test_build_request_shape() {
        let messages = vec![
            Message::system("sys"),
            Message::user("explain"),
        ];
        let body = OllamaClient::<MockHttpClient>::build_request("llama3", &messages);

        assert_eq!(body["model"], "llama3");
        assert_eq!(body["stream"], false);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "explain");
        assert_eq!(messages[0].role, MessageRole::System);
    }
}
