//! Ollama Wisdom
//!
//! Cached Ollama explanations for Prometheus alerts:
//! - Bounded LRU answer cache shared across invocations
//! - Ollama chat backend adapter with timing and token-usage capture
//! - Findings with explicit fallback behavior for failures and empty answers
//! - Alert enricher that attaches an "Ask Ollama" callback button

pub mod actions;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod service;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use infrastructure::{AnswerCache, HttpClient, OllamaClient};
use service::OllamaSearchService;

/// Wire the search service from configuration: HTTP client with the
/// configured timeout, Ollama adapter, and a cache sized per config. Meant
/// to be called once at startup; the service is shared for the process
/// lifetime.
pub fn create_search_service(config: &AppConfig) -> OllamaSearchService {
    let http = HttpClient::with_timeout(Duration::from_secs(config.ollama.timeout_secs));
    let provider = Arc::new(OllamaClient::new(http));
    let cache = Arc::new(AnswerCache::with_capacity(config.cache.capacity));

    OllamaSearchService::new(cache, provider)
}
