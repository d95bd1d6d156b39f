//! Vector index trait and types

use std::fmt::Debug;

use crate::domain::DomainError;

/// Closest stored vector to a query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestNeighbor {
    /// Identifier assigned when the vector was added
    pub id: usize,
    /// Squared Euclidean distance to the query
    pub distance: f32,
}

impl NearestNeighbor {
    /// Create a new search result
    pub fn new(id: usize, distance: f32) -> Self {
        Self { id, distance }
    }
}

/// Append-only store of fixed-dimension vectors with k=1 search.
///
/// Identifiers are sequential from 0 in insertion order and are never
/// reused: the n-th call to `add` returns `n - 1`.
pub trait VectorIndex: Send + Sync + Debug {
    /// Dimension every stored and queried vector must have
    fn dimension(&self) -> usize;

    /// Number of stored vectors
    fn len(&self) -> usize;

    /// Whether the index holds no vectors
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store a vector and return its identifier
    fn add(&mut self, vector: Vec<f32>) -> Result<usize, DomainError>;

    /// Find the stored vector with the smallest squared distance to `query`.
    ///
    /// Returns `None` when the index is empty.
    fn nearest(&self, query: &[f32]) -> Result<Option<NearestNeighbor>, DomainError>;
}
