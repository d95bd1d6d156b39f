use clap::Parser;
use semantic_response_cache::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo(args) => cli::demo::run(&cli.overrides, args).await,
        Command::Query(args) => cli::query::run(&cli.overrides, args).await,
    }
}
