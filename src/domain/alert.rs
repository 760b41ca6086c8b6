use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::OllamaParams;

/// A choice in a callback block: a button label plus the parameters the
/// host passes back to the search action when the button is activated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackChoice {
    pub label: String,
    pub action_params: OllamaParams,
}

/// An interactive enrichment attached to an alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackBlock {
    pub choices: Vec<CallbackChoice>,
}

impl CallbackBlock {
    pub fn new(choices: Vec<CallbackChoice>) -> Self {
        Self { choices }
    }
}

/// A Prometheus alert as handed over by the host's alert ingestion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrometheusAlert {
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub enrichments: Vec<CallbackBlock>,
}

impl PrometheusAlert {
    pub fn new(labels: HashMap<String, String>) -> Self {
        Self {
            labels,
            enrichments: Vec::new(),
        }
    }

    /// The `alertname` label, if present and non-empty.
    pub fn alert_name(&self) -> Option<&str> {
        self.labels
            .get("alertname")
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn add_enrichment(&mut self, block: CallbackBlock) {
        self.enrichments.push(block);
    }
}
