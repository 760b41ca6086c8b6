//! Host-facing action entry points

use tracing::info;

use crate::domain::{
    CallbackBlock, CallbackChoice, DomainError, FindingSink, OllamaParams, OllamaServerParams,
    PrometheusAlert,
};
use crate::service::{OllamaSearchService, build_finding};

/// Add a finding with Ollama top results for the specified search term.
///
/// The finding is delivered before any failure is propagated: on a backend
/// error the user still sees the gathered error text, and the host then
/// receives `Err` so it can mark the action run as failed.
pub async fn show_ollama_search(
    sink: &dyn FindingSink,
    service: &OllamaSearchService,
    params: &OllamaParams,
) -> Result<(), DomainError> {
    let outcome = service.execute(params).await;
    let finding = build_finding(&params.search_term, params.model(), &outcome.segments);

    sink.add_finding(finding);
    info!("Finding added to event");

    match outcome.failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Add a button to the alert - clicking it will ask Ollama to help find a
/// solution.
///
/// Derives the search term from the alert's `alertname` label; alerts
/// without one are left untouched.
pub fn ollama_enricher(alert: &mut PrometheusAlert, params: &OllamaServerParams) {
    let Some(alert_name) = alert.alert_name().map(str::to_string) else {
        return;
    };

    let choice = CallbackChoice {
        label: format!("Ask Ollama: {alert_name}"),
        action_params: OllamaParams::new(alert_name).with_server(params.clone()),
    };
    alert.add_enrichment(CallbackBlock::new(vec![choice]));
}
