//! Cache lookup metrics
//!
//! Recorded through the `metrics` facade; without an installed recorder the
//! macros are no-ops.

use std::time::Duration;

use metrics::{counter, histogram};

/// How a lookup ended, used as the `outcome` label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Hit,
    Miss,
    Error,
}

impl LookupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
            Self::Error => "error",
        }
    }
}

/// Parameters for cache lookup metrics
pub struct LookupMetricParams<'a> {
    pub model: &'a str,
    pub status: LookupStatus,
    pub duration: Duration,
    pub distance: Option<f32>,
}

/// Record a processed query
pub fn record_cache_lookup(params: LookupMetricParams) {
    let labels = [
        ("model", params.model.to_string()),
        ("outcome", params.status.as_str().to_string()),
    ];

    counter!("semantic_cache_lookups_total", &labels).increment(1);
    histogram!("semantic_cache_lookup_duration_seconds", &labels)
        .record(params.duration.as_secs_f64());

    if let Some(distance) = params.distance {
        histogram!("semantic_cache_nearest_distance", &labels).record(distance as f64);
    }
}
