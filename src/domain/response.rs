use serde::{Deserialize, Serialize};

/// Token usage reported by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub total_tokens: u32,
}

impl Usage {
    pub fn new(total_tokens: u32) -> Self {
        Self { total_tokens }
    }
}

/// Response from a chat backend.
///
/// Usage is optional: not every backend reports a token count, and its
/// absence is not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub content: String,
    pub usage: Option<Usage>,
}

impl ChatResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: None,
        }
    }

    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Token count of this response, 0 when the backend reported none.
    pub fn token_count(&self) -> u32 {
        self.usage.as_ref().map(|u| u.total_tokens).unwrap_or(0)
    }
}
