//! Demo command - runs the sample queries against a fresh cache

use std::time::Duration;

use clap::Args;
use tracing::info;

use super::{load_config, print_outcome, print_stats, CacheOverrides};
use crate::infrastructure::logging;

/// Queries exercising a hit ("French capital"), a near-paraphrase and
/// unrelated topics
pub const DEMO_QUERIES: &[&str] = &[
    "What is the capital of France?",
    "What is the French capital?",
    "Who wrote Don Quixote?",
    "What is the main city in France?",
    "What is the color of the sky?",
];

/// Arguments for the demo command
#[derive(Args, Clone, Debug)]
pub struct DemoArgs {
    /// Pause between queries, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,
}

/// Run the demo
pub async fn run(overrides: &CacheOverrides, args: DemoArgs) -> anyhow::Result<()> {
    let config = load_config(overrides)?;
    logging::init_logging(&config.logging);

    let mut cache = crate::create_semantic_cache(&config)?;
    let delay = Duration::from_millis(args.delay_ms);

    info!(queries = DEMO_QUERIES.len(), "Starting demo");

    for (i, query) in DEMO_QUERIES.iter().enumerate() {
        let result = cache.process_query(query).await;
        print_outcome(query, &result);

        if i + 1 < DEMO_QUERIES.len() && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    print_stats(&cache.stats());

    Ok(())
}
