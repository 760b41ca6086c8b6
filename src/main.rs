use clap::Parser;
use ollama_wisdom::actions::show_ollama_search;
use ollama_wisdom::domain::{Finding, FindingSink, OllamaParams, OllamaServerParams};
use ollama_wisdom::infrastructure::logging::init_logging;
use ollama_wisdom::{AppConfig, create_search_service};

/// Ask Ollama to explain a Prometheus alert
#[derive(Debug, Parser)]
#[command(name = "ollama-wisdom", version)]
struct Cli {
    /// Alert name or search term to explain
    search_term: String,

    /// Ollama model (overrides config)
    #[arg(long)]
    model: Option<String>,

    /// Ollama host URL (overrides config)
    #[arg(long)]
    host: Option<String>,
}

/// Prints findings instead of handing them to a notification surface.
struct StdoutSink;

impl FindingSink for StdoutSink {
    fn add_finding(&self, finding: Finding) {
        println!("# {}\n\n{}", finding.title, finding.body());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    init_logging(&config.logging);

    let service = create_search_service(&config);
    let params = OllamaParams {
        server: OllamaServerParams {
            model: cli.model.unwrap_or(config.ollama.model),
            host: cli.host.unwrap_or(config.ollama.host),
        },
        search_term: cli.search_term,
    };

    show_ollama_search(&StdoutSink, &service, &params).await?;
    Ok(())
}
