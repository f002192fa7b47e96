//! demoflow CLI - demo-data generation and orchestration for jaffle_shop_online

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{clear, demo, incremental};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        cli::Commands::Incremental(args) => incremental::execute(args, &cli.global).await,
        cli::Commands::Demo(args) => demo::execute(args, &cli.global).await,
        cli::Commands::Clear(args) => clear::execute(args, &cli.global).await,
    }
}
