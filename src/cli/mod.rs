//! CLI module for the semantic response cache
//!
//! Provides subcommands that drive one in-process cache:
//! - `demo`: run the built-in sample queries with a pause between them
//! - `query`: process the queries given on the command line

pub mod demo;
pub mod query;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::config::{AppConfig, GeneratorKind};
use crate::domain::semantic_cache::{CacheStats, QueryOutcome};
use crate::domain::DomainError;

/// Semantic response cache - reuse answers for semantically similar queries
#[derive(Parser)]
#[command(name = "semantic-cache")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: CacheOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the sample queries against a fresh cache
    Demo(demo::DemoArgs),

    /// Process the given queries in order against a fresh cache
    Query(query::QueryArgs),
}

/// Command-line overrides applied on top of the loaded configuration
#[derive(Args, Clone, Debug, Default)]
pub struct CacheOverrides {
    /// Generator used on cache misses
    #[arg(long, global = true, value_enum)]
    pub generator: Option<GeneratorKind>,

    /// Squared L2 distance below which a query is a hit
    #[arg(long, global = true)]
    pub threshold: Option<f32>,

    /// Embedding model identifier
    #[arg(long, global = true)]
    pub embedding_model: Option<String>,

    /// Embedding dimension the model produces
    #[arg(long, global = true)]
    pub dimension: Option<usize>,
}

impl CacheOverrides {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(kind) = self.generator {
            config.generator.kind = kind;
        }

        if let Some(threshold) = self.threshold {
            config.cache.threshold = threshold;
        }

        if let Some(ref model) = self.embedding_model {
            config.cache.embedding_model = model.clone();
        }

        if let Some(dimension) = self.dimension {
            config.cache.dimension = dimension;
        }
    }
}

fn load_config(overrides: &CacheOverrides) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    overrides.apply(&mut config);

    Ok(config)
}

fn print_outcome(query: &str, result: &Result<QueryOutcome, DomainError>) {
    println!("\nQuery: '{}'", query);

    match result {
        Ok(QueryOutcome::Hit {
            id,
            distance,
            response,
            elapsed,
        }) => {
            println!("  CACHE HIT  distance {:.4}, entry {}", distance, id);
            println!("  Response (from cache): '{}'", response);
            println!("  Total time: {:.2} seconds", elapsed.as_secs_f64());
        }
        Ok(QueryOutcome::Miss {
            id,
            nearest_distance,
            response,
            elapsed,
        }) => {
            match nearest_distance {
                Some(distance) => println!("  CACHE MISS minimum distance {:.4}", distance),
                None => println!("  CACHE MISS cache empty"),
            }
            println!("  Stored as entry {}", id);
            println!("  Response (new): '{}'", response);
            println!("  Total time: {:.2} seconds", elapsed.as_secs_f64());
        }
        Err(e) => {
            println!("  Could not process query: {}", e);
        }
    }
}

fn print_stats(stats: &CacheStats) {
    println!(
        "\nEntries: {}  Hits: {}  Misses: {}  Failures: {}  Hit rate: {:.0}%",
        stats.entries,
        stats.hits,
        stats.misses,
        stats.failures,
        stats.hit_rate() * 100.0
    );
}
