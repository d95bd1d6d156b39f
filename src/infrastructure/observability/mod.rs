//! Observability infrastructure - cache lookup metrics

mod metrics;

pub use self::metrics::{record_cache_lookup, LookupMetricParams, LookupStatus};
