//! Semantic Response Cache
//!
//! Reuses generated answers for queries that mean the same thing:
//! - Queries are embedded and normalized to unit length
//! - An exact nearest-neighbor search compares them with earlier queries
//! - Close enough (squared L2 distance below a threshold) is a hit, anything
//!   else generates a new response and caches it

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use config::GeneratorKind;
use domain::generation::ResponseGenerator;
use infrastructure::{
    embedding::OllamaEmbeddingProvider,
    generation::{OllamaResponseGenerator, TemplateResponseGenerator},
    services::SemanticCacheService,
    HttpClient,
};
use tracing::info;

/// Create a semantic cache wired to the providers named in the configuration
pub fn create_semantic_cache(config: &AppConfig) -> anyhow::Result<SemanticCacheService> {
    let http_client = HttpClient::with_timeout(Duration::from_secs(config.ollama.timeout_secs))?;

    let embedding_provider = Arc::new(OllamaEmbeddingProvider::with_base_url(
        http_client.clone(),
        &config.ollama.base_url,
    ));

    let generator: Arc<dyn ResponseGenerator> = match config.generator.kind {
        GeneratorKind::Template => Arc::new(TemplateResponseGenerator::new()),
        GeneratorKind::Ollama => {
            let generator = OllamaResponseGenerator::with_base_url(
                http_client,
                &config.generator.model,
                &config.ollama.base_url,
            );
            info!(model = generator.model(), "Using Ollama response generator");
            Arc::new(generator)
        }
    };

    info!(
        base_url = %config.ollama.base_url,
        generator = generator.generator_name(),
        "Creating semantic cache"
    );

    let cache = SemanticCacheService::new(embedding_provider, generator, config.cache.clone())?;

    Ok(cache)
}
