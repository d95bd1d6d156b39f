//! Embedding response types

use serde::{Deserialize, Serialize};

/// Raw embedding returned by a provider, before normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// Model used
    model: String,
    /// The embedding vector
    embedding: Vec<f32>,
}

impl EmbeddingResponse {
    /// Create a new embedding response
    pub fn new(model: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            model: model.into(),
            embedding,
        }
    }

    /// Get the model used
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the embedding vector
    pub fn vector(&self) -> &[f32] {
        &self.embedding
    }

    /// Get the embedding dimensions
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }

    /// Consume and return the vector
    pub fn into_vector(self) -> Vec<f32> {
        self.embedding
    }
}
