use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::semantic_cache::SemanticCacheConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub cache: SemanticCacheConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Connection settings for the Ollama server
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Which response generator answers cache misses
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Timestamped placeholder, no model call
    #[default]
    Template,
    /// Ollama `/api/generate`
    Ollama,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub kind: GeneratorKind,
    pub model: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            timeout_secs: 120,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kind: GeneratorKind::default(),
            model: "mistral:7b".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `APP__*` variables,
    /// later sources overriding earlier ones
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            config::Config::builder()
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name("config/local").required(false))
                .add_source(Self::environment()),
        )
    }

    fn environment() -> Environment {
        Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
