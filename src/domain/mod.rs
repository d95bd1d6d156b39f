//! Domain layer - Core types, traits and errors

pub mod embedding;
pub mod error;
pub mod generation;
pub mod semantic_cache;

pub use embedding::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse};
pub use error::DomainError;
pub use generation::{GenerationRequest, ResponseGenerator};
pub use semantic_cache::{
    CacheStats, NearestNeighbor, QueryOutcome, SemanticCacheConfig, VectorIndex,
};
