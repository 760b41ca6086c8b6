//! Cached query executor for Ollama alert explanations

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use super::prompt;
use crate::domain::{ChatProvider, DomainError, OllamaParams};
use crate::infrastructure::AnswerCache;

/// Outcome of a search invocation.
///
/// Carries whatever text was gathered alongside an explicit failure, so a
/// backend error still yields a presentable payload (the error text) while
/// the caller can mark the run as failed. This replaces catch-and-reraise:
/// the caller decides whether the failure is fatal.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Ordered answer segments, joined with blank lines at format time.
    /// Empty means the backend had nothing useful to say.
    pub segments: Vec<String>,
    /// Set when the backend call failed; the segments then contain the
    /// user-visible error text.
    pub failure: Option<DomainError>,
}

impl SearchOutcome {
    fn success(segments: Vec<String>) -> Self {
        Self {
            segments,
            failure: None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// Orchestrates cache lookup, cache-miss backend invocation, timing and
/// cache population.
///
/// Owned by the long-lived host object and constructed once at startup; the
/// cache is shared across all invocations for the process lifetime.
#[derive(Debug)]
pub struct OllamaSearchService {
    cache: Arc<AnswerCache>,
    provider: Arc<dyn ChatProvider>,
}

impl OllamaSearchService {
    pub fn new(cache: Arc<AnswerCache>, provider: Arc<dyn ChatProvider>) -> Self {
        Self { cache, provider }
    }

    /// Execute a search for the given parameters.
    ///
    /// Cache hits are authoritative and skip the backend entirely; the
    /// timing/usage footer is only produced on the path that actually called
    /// the backend. A single failed call is a single reported failure, with
    /// no retry.
    pub async fn execute(&self, params: &OllamaParams) -> SearchOutcome {
        info!(search_term = %params.search_term, "Ollama search");

        if let Some(cached) = self.cache.get(&params.search_term) {
            debug!(search_term = %params.search_term, "Answer served from cache");
            return SearchOutcome::success(cached);
        }

        let messages = prompt::explanation_prompt(&params.search_term);
        let start = Instant::now();

        match self
            .provider
            .chat(params.model(), params.host(), messages)
            .await
        {
            Ok(response) => {
                let elapsed = start.elapsed();

                if response.content.trim().is_empty() {
                    // Reachable backend with nothing to say: not an error,
                    // and not worth caching.
                    return SearchOutcome::success(Vec::new());
                }

                let tokens = response.token_count();
                self.cache
                    .put(params.search_term.clone(), vec![response.content.clone()]);

                SearchOutcome::success(vec![
                    response.content,
                    "---".to_string(),
                    format!(
                        "| Time taken: {:.2} seconds | Total tokens used: {} |",
                        elapsed.as_secs_f64(),
                        tokens
                    ),
                ])
            }
            Err(e) => {
                error!(error = %e, "Error calling Ollama client");
                SearchOutcome {
                    segments: vec![format!("Error calling Ollama client: {e}")],
                    failure: Some(e),
                }
            }
        }
    }
}
