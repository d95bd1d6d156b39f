//! Ollama response generator

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::generation::{GenerationRequest, ResponseGenerator};
use crate::domain::DomainError;
use crate::infrastructure::HttpClientTrait;

const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Generates responses with a non-streaming Ollama `/api/generate` call
#[derive(Debug)]
pub struct OllamaResponseGenerator<C: HttpClientTrait> {
    client: C,
    model: String,
    base_url: String,
}

impl<C: HttpClientTrait> OllamaResponseGenerator<C> {
    /// Create a generator talking to the default local Ollama endpoint
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self::with_base_url(client, model, DEFAULT_OLLAMA_BASE_URL)
    }

    /// Create a generator with a custom base URL
    pub fn with_base_url(client: C, model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the model used for generation
    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    fn build_request(&self, request: &GenerationRequest) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "prompt": request.prompt(),
            "stream": false,
        })
    }
}

#[async_trait]
impl<C: HttpClientTrait> ResponseGenerator for OllamaResponseGenerator<C> {
    async fn generate(&self, request: GenerationRequest) -> Result<String, DomainError> {
        let url = self.generate_url();
        let body = self.build_request(&request);

        let json = self
            .client
            .post_json(&url, vec![("Content-Type", "application/json")], &body)
            .await
            .map_err(|e| DomainError::generation(self.generator_name(), e.to_string()))?;

        let response: OllamaGenerateResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::generation(
                self.generator_name(),
                format!("Failed to parse generate response: {}", e),
            )
        })?;

        Ok(response.response)
    }

    fn generator_name(&self) -> &'static str {
        "ollama"
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}
