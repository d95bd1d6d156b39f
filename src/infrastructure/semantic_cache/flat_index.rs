//! Exact nearest-neighbor index using a linear scan

use crate::domain::embedding::squared_l2_distance;
use crate::domain::semantic_cache::{NearestNeighbor, VectorIndex};
use crate::domain::DomainError;

/// Flat index over squared Euclidean distance.
///
/// Vectors are stored back to back in one buffer; the identifier of a vector
/// is its position in insertion order. Search compares the query against
/// every stored vector, which is fine for the sizes a process-local cache
/// reaches.
#[derive(Debug)]
pub struct FlatL2Index {
    dimension: usize,
    data: Vec<f32>,
}

impl FlatL2Index {
    /// Create an empty index for vectors of `dimension` components
    pub fn new(dimension: usize) -> Result<Self, DomainError> {
        if dimension == 0 {
            return Err(DomainError::validation(
                "Index dimension must be greater than zero",
            ));
        }

        Ok(Self {
            dimension,
            data: Vec::new(),
        })
    }

    fn check(&self, vector: &[f32]) -> Result<(), DomainError> {
        if vector.len() != self.dimension {
            return Err(DomainError::dimension_mismatch(self.dimension, vector.len()));
        }

        if vector.iter().any(|x| !x.is_finite()) {
            return Err(DomainError::validation(
                "Vector contains non-finite components",
            ));
        }

        Ok(())
    }
}

impl VectorIndex for FlatL2Index {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn len(&self) -> usize {
        self.data.len() / self.dimension
    }

    fn add(&mut self, vector: Vec<f32>) -> Result<usize, DomainError> {
        self.check(&vector)?;

        let id = self.len();
        self.data.extend_from_slice(&vector);

        Ok(id)
    }

    fn nearest(&self, query: &[f32]) -> Result<Option<NearestNeighbor>, DomainError> {
        self.check(query)?;

        let mut best: Option<NearestNeighbor> = None;

        for (id, stored) in self.data.chunks_exact(self.dimension).enumerate() {
            let distance = squared_l2_distance(query, stored);

            // Strict comparison keeps the earliest entry on ties
            let closer = best.map_or(true, |current| distance < current.distance);

            if closer {
                best = Some(NearestNeighbor::new(id, distance));
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(FlatL2Index::new(0).is_err());
    }

    #[test]
    fn test_sequential_ids() {
        let mut index = FlatL2Index::new(2).unwrap();

        assert!(index.is_empty());
        assert_eq!(index.add(vec![1.0, 0.0]).unwrap(), 0);
        assert_eq!(index.add(vec![0.0, 1.0]).unwrap(), 1);
        assert_eq!(index.add(vec![1.0, 0.0]).unwrap(), 2);
        assert_eq!(index.len(), 3);
        assert_eq!(index.nearest(&[0.0, 1.0]).unwrap().unwrap().id, 1);
    }

    #[test]
    fn test_nearest_on_empty_index() {
        let index = FlatL2Index::new(3).unwrap();

        assert_eq!(index.nearest(&[1.0, 0.0, 0.0]).unwrap(), None);
    }

    #[test]
    fn test_nearest_picks_smallest_distance() {
        let mut index = FlatL2Index::new(3).unwrap();
        index.add(vec![0.0, 1.0, 0.0]).unwrap();
        index.add(vec![0.8, 0.6, 0.0]).unwrap();
        index.add(vec![0.0, 0.0, 1.0]).unwrap();

        let result = index.nearest(&[1.0, 0.0, 0.0]).unwrap().unwrap();

        assert_eq!(result.id, 1);
        // (1 - 0.8)^2 + 0.6^2
        assert!((result.distance - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_ties_resolve_to_first_inserted() {
        let mut index = FlatL2Index::new(2).unwrap();
        index.add(vec![0.0, 1.0]).unwrap();
        index.add(vec![0.0, -1.0]).unwrap();

        let result = index.nearest(&[1.0, 0.0]).unwrap().unwrap();

        assert_eq!(result.id, 0);
        assert!((result.distance - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut index = FlatL2Index::new(4).unwrap();

        assert!(matches!(
            index.add(vec![1.0, 0.0]),
            Err(DomainError::DimensionMismatch {
                expected: 4,
                actual: 2
            })
        ));
        assert!(matches!(
            index.nearest(&[1.0; 5]),
            Err(DomainError::DimensionMismatch { .. })
        ));
        assert!(index.is_empty());
    }

    #[test]
    fn test_rejects_non_finite_vectors() {
        let mut index = FlatL2Index::new(2).unwrap();

        assert!(index.add(vec![f32::NAN, 0.0]).is_err());
        assert!(index.nearest(&[f32::INFINITY, 0.0]).is_err());
        assert!(index.is_empty());
    }

    #[test]
    fn test_zero_vector_matches_only_zero_vector() {
        let mut index = FlatL2Index::new(2).unwrap();
        index.add(vec![1.0, 0.0]).unwrap();
        index.add(vec![0.0, 0.0]).unwrap();

        let result = index.nearest(&[0.0, 0.0]).unwrap().unwrap();

        assert_eq!(result.id, 1);
        assert_eq!(result.distance, 0.0);
    }
}
