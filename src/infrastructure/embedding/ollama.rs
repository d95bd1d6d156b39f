//! Ollama embedding provider implementation

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::embedding::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse};
use crate::domain::DomainError;
use crate::infrastructure::HttpClientTrait;

const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Embedding provider backed by a local Ollama server
#[derive(Debug)]
pub struct OllamaEmbeddingProvider<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> OllamaEmbeddingProvider<C> {
    /// Create a provider talking to the default local Ollama endpoint
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, DEFAULT_OLLAMA_BASE_URL)
    }

    /// Create a provider with a custom base URL
    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    fn embeddings_url(&self) -> String {
        format!("{}/api/embeddings", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![("Content-Type", "application/json")]
    }

    fn build_request(&self, request: &EmbeddingRequest) -> serde_json::Value {
        serde_json::json!({
            "model": request.model(),
            "prompt": request.input(),
        })
    }

    fn parse_response(
        &self,
        model: &str,
        json: serde_json::Value,
    ) -> Result<EmbeddingResponse, DomainError> {
        let response: OllamaEmbeddingResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::embedding(
                self.provider_name(),
                format!("Failed to parse embedding response: {}", e),
            )
        })?;

        if response.embedding.is_empty() {
            return Err(DomainError::embedding(
                self.provider_name(),
                "Empty embedding returned",
            ));
        }

        Ok(EmbeddingResponse::new(model, response.embedding))
    }
}

#[async_trait]
impl<C: HttpClientTrait> EmbeddingProvider for OllamaEmbeddingProvider<C> {
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
        let url = self.embeddings_url();
        let body = self.build_request(&request);

        let response = self
            .client
            .post_json(&url, self.headers(), &body)
            .await
            .map_err(|e| DomainError::embedding(self.provider_name(), e.to_string()))?;

        self.parse_response(request.model(), response)
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }
}

// Ollama API types for embeddings

#[derive(Debug, Serialize, Deserialize)]
struct OllamaEmbeddingResponse {
    embedding: Vec<f32>,
}
