//! Semantic response caching service
//!
//! Answers a query from a previously generated response when an earlier
//! query's normalized embedding lies within the configured squared L2
//! distance; otherwise generates a fresh response and stores it.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use crate::domain::embedding::{normalize, EmbeddingProvider, EmbeddingRequest};
use crate::domain::generation::{GenerationRequest, ResponseGenerator};
use crate::domain::semantic_cache::{CacheStats, QueryOutcome, SemanticCacheConfig, VectorIndex};
use crate::domain::DomainError;
use crate::infrastructure::observability::{record_cache_lookup, LookupMetricParams, LookupStatus};
use crate::infrastructure::semantic_cache::FlatL2Index;

/// Semantic cache over a vector index and a response table.
///
/// The response table is indexed by the identifier the vector index assigns,
/// so both always hold the same number of entries. Entries are never
/// modified or removed.
#[derive(Debug)]
pub struct SemanticCacheService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    generator: Arc<dyn ResponseGenerator>,
    index: Box<dyn VectorIndex>,
    responses: Vec<String>,
    config: SemanticCacheConfig,
    hits: u64,
    misses: u64,
    failures: u64,
}

impl SemanticCacheService {
    /// Create a cache backed by a flat L2 index
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        generator: Arc<dyn ResponseGenerator>,
        config: SemanticCacheConfig,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        let index = Box::new(FlatL2Index::new(config.dimension)?);

        Self::with_index(embedding_provider, generator, index, config)
    }

    /// Create a cache over a caller-supplied empty index
    pub fn with_index(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        generator: Arc<dyn ResponseGenerator>,
        index: Box<dyn VectorIndex>,
        config: SemanticCacheConfig,
    ) -> Result<Self, DomainError> {
        config.validate()?;

        if index.dimension() != config.dimension {
            return Err(DomainError::configuration(format!(
                "Index dimension {} does not match configured dimension {}",
                index.dimension(),
                config.dimension
            )));
        }

        if !index.is_empty() {
            return Err(DomainError::configuration(
                "Semantic cache must start from an empty index",
            ));
        }

        info!(
            model = %config.embedding_model,
            dimension = config.dimension,
            threshold = config.threshold,
            embedding_provider = embedding_provider.provider_name(),
            generator = generator.generator_name(),
            "Semantic cache initialized"
        );

        Ok(Self {
            embedding_provider,
            generator,
            index,
            responses: Vec::new(),
            config,
            hits: 0,
            misses: 0,
            failures: 0,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &SemanticCacheConfig {
        &self.config
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Get the response stored under an identifier
    pub fn response(&self, id: usize) -> Option<&str> {
        self.responses.get(id).map(String::as_str)
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.responses.len(),
            hits: self.hits,
            misses: self.misses,
            failures: self.failures,
        }
    }

    /// Embed `text` and scale the result to unit length.
    ///
    /// A zero-magnitude embedding is returned as-is.
    pub async fn embed_query(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let request = EmbeddingRequest::new(&self.config.embedding_model, text);
        let response = self.embedding_provider.embed(request).await?;

        if response.dimensions() != self.config.dimension {
            return Err(DomainError::dimension_mismatch(
                self.config.dimension,
                response.dimensions(),
            ));
        }

        if response.vector().iter().any(|x| !x.is_finite()) {
            return Err(DomainError::embedding(
                self.embedding_provider.provider_name(),
                "Embedding contains non-finite components",
            ));
        }

        Ok(normalize(response.into_vector()))
    }

    /// Answer a query from the cache or by generating a new response.
    ///
    /// On error nothing is stored and the cache remains usable.
    #[instrument(skip(self), fields(model = %self.config.embedding_model))]
    pub async fn process_query(&mut self, query: &str) -> Result<QueryOutcome, DomainError> {
        let start = Instant::now();
        info!("Processing query");

        match self.lookup(query, start).await {
            Ok(outcome) => {
                let status = if outcome.is_hit() {
                    self.hits += 1;
                    LookupStatus::Hit
                } else {
                    self.misses += 1;
                    LookupStatus::Miss
                };

                record_cache_lookup(LookupMetricParams {
                    model: &self.config.embedding_model,
                    status,
                    duration: outcome.elapsed(),
                    distance: outcome.distance(),
                });

                info!(
                    elapsed_ms = outcome.elapsed().as_millis() as u64,
                    "Query processed"
                );

                Ok(outcome)
            }
            Err(e) => {
                self.failures += 1;

                record_cache_lookup(LookupMetricParams {
                    model: &self.config.embedding_model,
                    status: LookupStatus::Error,
                    duration: start.elapsed(),
                    distance: None,
                });

                warn!(error = %e, kind = e.kind(), "Could not process query");

                Err(e)
            }
        }
    }

    async fn lookup(&mut self, query: &str, start: Instant) -> Result<QueryOutcome, DomainError> {
        if query.trim().is_empty() {
            return Err(DomainError::validation("Query text must not be empty"));
        }

        let embedding = self.embed_query(query).await?;

        let Some(nearest) = self.index.nearest(&embedding)? else {
            info!("Cache empty, generating new response");
            return self.handle_miss(query, embedding, None, start).await;
        };

        if nearest.distance < self.config.threshold {
            let response = self.response(nearest.id).ok_or_else(|| {
                DomainError::internal(format!("No response stored for entry {}", nearest.id))
            })?;

            info!(
                id = nearest.id,
                distance = nearest.distance,
                threshold = self.config.threshold,
                "Cache hit"
            );

            return Ok(QueryOutcome::Hit {
                id: nearest.id,
                distance: nearest.distance,
                response: response.to_string(),
                elapsed: start.elapsed(),
            });
        }

        info!(
            distance = nearest.distance,
            threshold = self.config.threshold,
            "Cache miss"
        );

        self.handle_miss(query, embedding, Some(nearest.distance), start)
            .await
    }

    async fn handle_miss(
        &mut self,
        query: &str,
        embedding: Vec<f32>,
        nearest_distance: Option<f32>,
        start: Instant,
    ) -> Result<QueryOutcome, DomainError> {
        debug!(generator = self.generator.generator_name(), "Generating new response");

        let response = self
            .generator
            .generate(GenerationRequest::new(query))
            .await?;

        let expected_id = self.responses.len();
        let id = self.index.add(embedding)?;

        if id != expected_id {
            return Err(DomainError::internal(format!(
                "Index assigned id {} but response table expected {}",
                id, expected_id
            )));
        }

        self.responses.push(response.clone());

        info!(id, "New response added to cache");

        Ok(QueryOutcome::Miss {
            id,
            nearest_distance,
            response,
            elapsed: start.elapsed(),
        })
    }
}
