//! Query command - processes queries given on the command line

use clap::Args;

use super::{load_config, print_outcome, print_stats, CacheOverrides};
use crate::infrastructure::logging;

/// Arguments for the query command
#[derive(Args, Clone, Debug)]
pub struct QueryArgs {
    /// Queries to process, in order
    #[arg(required = true)]
    pub queries: Vec<String>,
}

/// Run the given queries through one cache
pub async fn run(overrides: &CacheOverrides, args: QueryArgs) -> anyhow::Result<()> {
    let config = load_config(overrides)?;
    logging::init_logging(&config.logging);

    let mut cache = crate::create_semantic_cache(&config)?;

    for query in &args.queries {
        let result = cache.process_query(query).await;
        print_outcome(query, &result);
    }

    print_stats(&cache.stats());

    Ok(())
}
