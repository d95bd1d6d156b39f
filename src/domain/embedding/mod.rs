//! Embedding provider domain models and traits

mod provider;
mod request;
mod response;
mod vector;

pub use provider::EmbeddingProvider;
pub use request::EmbeddingRequest;
pub use response::EmbeddingResponse;
pub use vector::{l2_norm, normalize, squared_l2_distance};

#[cfg(test)]
pub use provider::mock::MockEmbeddingProvider;
