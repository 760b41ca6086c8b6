//! Infrastructure layer - cache, transport and backend adapters

pub mod cache;
pub mod http_client;
pub mod logging;
pub mod ollama;

pub use cache::{AnswerCache, DEFAULT_CAPACITY};
pub use http_client::{HttpClient, HttpClientTrait};
pub use ollama::OllamaClient;
