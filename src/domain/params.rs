use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "llama3".to_string()
}

fn default_host() -> String {
    "http://localhost:11434".to_string()
}

/// Connection parameters for the Ollama backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaServerParams {
    /// Ollama model
    #[serde(default = "default_model")]
    pub model: String,
    /// URL for the Ollama host
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for OllamaServerParams {
    fn default() -> Self {
        Self {
            model: default_model(),
            host: default_host(),
        }
    }
}

/// Parameters for a single search invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaParams {
    #[serde(flatten)]
    pub server: OllamaServerParams,
    /// Ollama search term
    pub search_term: String,
}

impl OllamaParams {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            server: OllamaServerParams::default(),
            search_term: search_term.into(),
        }
    }

    pub fn with_server(mut self, server: OllamaServerParams) -> Self {
        self.server = server;
        self
    }

    pub fn model(&self) -> &str {
        &self.server.model
    }

    pub fn host(&self) -> &str {
        &self.server.host
    }
}
