//! Turns answer segments into the final presentable finding

use crate::domain::{Finding, FindingSource, MarkdownBlock};

/// Groups all Ollama findings under one family for the host.
pub const AGGREGATION_KEY: &str = "Ollama Wisdom";

/// Build the finding for a search result. Pure besides construction.
///
/// Non-empty segments become a single Markdown block with blank-line
/// separation; empty segments become an explicit "nothing found" message
/// with the search term interpolated verbatim.
pub fn build_finding(search_term: &str, model: &str, segments: &[String]) -> Finding {
    let mut finding = Finding::new(
        format!("Ollama ({model}) Results"),
        FindingSource::Prometheus,
        AGGREGATION_KEY,
    );

    if segments.is_empty() {
        finding.add_enrichment(vec![MarkdownBlock::new(format!(
            "Sorry, Ollama doesn't know anything about \"{search_term}\""
        ))]);
    } else {
        finding.add_enrichment(vec![MarkdownBlock::new(segments.join("\n\n"))]);
    }

    finding
}
