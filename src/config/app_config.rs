use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    #[serde(default = "OllamaConfig::default_model")]
    pub model: String,
    #[serde(default = "OllamaConfig::default_host")]
    pub host: String,
    /// Request timeout for the backend call. Generous on purpose: local
    /// models can take a long time to answer.
    #[serde(default = "OllamaConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "CacheSettings::default_capacity")]
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl OllamaConfig {
    fn default_model() -> String {
        "llama3".to_string()
    }

    fn default_host() -> String {
        "http://localhost:11434".to_string()
    }

    fn default_timeout_secs() -> u64 {
        120
    }
}

impl CacheSettings {
    fn default_capacity() -> usize {
        100
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            model: Self::default_model(),
            host: Self::default_host(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ollama.model, "llama3");
        assert_eq!(config.ollama.host, "http://localhost:11434");
        assert_eq!(config.cache.capacity, 100);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml_like(r#"{"ollama": {"model": "mistral"}}"#);
        assert_eq!(config.ollama.model, "mistral");
        assert_eq!(config.ollama.host, "http://localhost:11434");
        assert_eq!(config.cache.capacity, 100);
    }

    fn toml_like(json: &str) -> AppConfig {
        serde_json::from_str(json).unwrap()
    }
}
