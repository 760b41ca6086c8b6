use serde::{Deserialize, Serialize};

/// Origin of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingSource {
    Prometheus,
}

/// A renderable Markdown content block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownBlock {
    pub text: String,
}

impl MarkdownBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A structured, presentable record summarizing the outcome of an action,
/// delivered to the host's notification surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub title: String,
    pub source: FindingSource,
    /// Groups repeated occurrences of the same finding family
    pub aggregation_key: String,
    pub blocks: Vec<MarkdownBlock>,
}

impl Finding {
    pub fn new(
        title: impl Into<String>,
        source: FindingSource,
        aggregation_key: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source,
            aggregation_key: aggregation_key.into(),
            blocks: Vec::new(),
        }
    }

    pub fn add_enrichment(&mut self, blocks: Vec<MarkdownBlock>) {
        self.blocks.extend(blocks);
    }

    /// Concatenated text of all blocks, for display and assertions.
    pub fn body(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Delivery channel for findings, provided by the host collaborator.
///
/// The finding is owned by the sink once delivered.
pub trait FindingSink: Send + Sync {
    fn add_finding(&self, finding: Finding);
}
