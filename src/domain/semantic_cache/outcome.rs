//! Results of processing a query through the cache

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a query was answered
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// A stored response was close enough and returned verbatim
    Hit {
        id: usize,
        distance: f32,
        response: String,
        elapsed: Duration,
    },
    /// A new response was generated and stored under `id`.
    /// `nearest_distance` is `None` when the cache was empty.
    Miss {
        id: usize,
        nearest_distance: Option<f32>,
        response: String,
        elapsed: Duration,
    },
}

impl QueryOutcome {
    /// Whether the response came from the cache
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    /// Identifier of the entry that answered the query
    pub fn id(&self) -> usize {
        match self {
            Self::Hit { id, .. } | Self::Miss { id, .. } => *id,
        }
    }

    /// The response text
    pub fn response(&self) -> &str {
        match self {
            Self::Hit { response, .. } | Self::Miss { response, .. } => response,
        }
    }

    /// Distance to the closest stored query, if there was one
    pub fn distance(&self) -> Option<f32> {
        match self {
            Self::Hit { distance, .. } => Some(*distance),
            Self::Miss {
                nearest_distance, ..
            } => *nearest_distance,
        }
    }

    /// Wall time spent processing the query
    pub fn elapsed(&self) -> Duration {
        match self {
            Self::Hit { elapsed, .. } | Self::Miss { elapsed, .. } => *elapsed,
        }
    }
}

/// Statistics for the semantic cache
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of stored entries
    pub entries: usize,
    /// Queries answered from the cache
    pub hits: u64,
    /// Queries that generated a new response
    pub misses: u64,
    /// Queries aborted by an embedding or generation failure
    pub failures: u64,
}

impl CacheStats {
    /// Fraction of successful queries answered from the cache
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;

        if total == 0 {
            return 0.0;
        }

        self.hits as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_accessors() {
        let outcome = QueryOutcome::Hit {
            id: 3,
            distance: 0.05,
            response: "cached".to_string(),
            elapsed: Duration::from_millis(12),
        };

        assert!(outcome.is_hit());
        assert_eq!(outcome.id(), 3);
        assert_eq!(outcome.response(), "cached");
        assert_eq!(outcome.distance(), Some(0.05));
        assert_eq!(outcome.elapsed(), Duration::from_millis(12));
    }

    #[test]
    fn test_miss_on_empty_cache_has_no_distance() {
        let outcome = QueryOutcome::Miss {
            id: 0,
            nearest_distance: None,
            response: "fresh".to_string(),
            elapsed: Duration::ZERO,
        };

        assert!(!outcome.is_hit());
        assert_eq!(outcome.distance(), None);
        assert_eq!(outcome.response(), "fresh");
    }

    #[test]
    fn test_hit_rate() {
        let stats = CacheStats {
            entries: 3,
            hits: 2,
            misses: 3,
            failures: 1,
        };

        assert!((stats.hit_rate() - 0.4).abs() < 0.001);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}
