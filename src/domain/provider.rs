use async_trait::async_trait;
use std::fmt::Debug;

use super::{ChatResponse, Message};
use crate::domain::DomainError;

/// Trait for chat backends (for mocking and for keeping the executor
/// independent of the transport)
#[async_trait]
pub trait ChatProvider: Send + Sync + Debug {
    /// Send a chat completion request to the backend at `host`
    async fn chat(
        &self,
        model: &str,
        host: &str,
        messages: Vec<Message>,
    ) -> Result<ChatResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
