//! Semantic cache configuration

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Configuration for the semantic cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticCacheConfig {
    /// Embedding model to use
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Dimension every embedding must have
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// Squared L2 distance between unit vectors below which a query is a hit.
    /// Lower values require more similar queries.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

fn default_embedding_model() -> String {
    "mistral:7b".to_string()
}

fn default_dimension() -> usize {
    4096
}

fn default_threshold() -> f32 {
    0.2
}

impl Default for SemanticCacheConfig {
    fn default() -> Self {
        Self {
            embedding_model: default_embedding_model(),
            dimension: default_dimension(),
            threshold: default_threshold(),
        }
    }
}

impl SemanticCacheConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the embedding model
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Set the embedding dimension
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the hit threshold
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Check the configuration can back a cache
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.embedding_model.trim().is_empty() {
            return Err(DomainError::validation("Embedding model must not be empty"));
        }

        if self.dimension == 0 {
            return Err(DomainError::validation(
                "Embedding dimension must be greater than zero",
            ));
        }

        // Squared distances between unit vectors lie in [0, 4]
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(DomainError::validation(format!(
                "Threshold must be a finite non-negative number, got {}",
                self.threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SemanticCacheConfig::default();

        assert_eq!(config.embedding_model, "mistral:7b");
        assert_eq!(config.dimension, 4096);
        assert!((config.threshold - 0.2).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SemanticCacheConfig::new()
            .with_embedding_model("nomic-embed-text")
            .with_dimension(768)
            .with_threshold(0.1);

        assert_eq!(config.embedding_model, "nomic-embed-text");
        assert_eq!(config.dimension, 768);
        assert!((config.threshold - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validate_rejects_zero_dimension() {
        let config = SemanticCacheConfig::new().with_dimension(0);

        assert!(matches!(
            config.validate(),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        assert!(SemanticCacheConfig::new().with_threshold(-0.1).validate().is_err());
        assert!(SemanticCacheConfig::new().with_threshold(f32::NAN).validate().is_err());
        assert!(SemanticCacheConfig::new().with_threshold(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let config = SemanticCacheConfig::new().with_embedding_model("  ");

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: SemanticCacheConfig =
            serde_json::from_value(serde_json::json!({ "dimension": 4 })).unwrap();

        assert_eq!(config.dimension, 4);
        assert_eq!(config.embedding_model, "mistral:7b");
        assert!((config.threshold - 0.2).abs() < f32::EPSILON);
    }
}
