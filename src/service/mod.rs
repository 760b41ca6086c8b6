//! Service layer - query executor, prompt template and result formatter

pub mod formatter;
pub mod prompt;
pub mod search_service;

pub use formatter::{AGGREGATION_KEY, build_finding};
pub use search_service::{OllamaSearchService, SearchOutcome};
