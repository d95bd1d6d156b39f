//! Semantic cache domain models and traits
//!
//! Matches a query against previously answered queries by the distance
//! between their normalized embeddings rather than by exact text.

mod config;
mod index;
mod outcome;

pub use config::SemanticCacheConfig;
pub use index::{NearestNeighbor, VectorIndex};
pub use outcome::{CacheStats, QueryOutcome};
