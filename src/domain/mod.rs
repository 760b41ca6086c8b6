//! Domain layer - Core types, traits and errors

pub mod alert;
pub mod error;
pub mod finding;
pub mod message;
pub mod params;
pub mod provider;
pub mod response;

pub use alert::{CallbackBlock, CallbackChoice, PrometheusAlert};
pub use error::DomainError;
pub use finding::{Finding, FindingSink, FindingSource, MarkdownBlock};
pub use message::{Message, MessageRole};
pub use params::{OllamaParams, OllamaServerParams};
pub use provider::ChatProvider;
pub use response::{ChatResponse, Usage};
