//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// demoflow - seed, run, and test cycles for the jaffle_shop_online demo
#[derive(Parser, Debug)]
#[command(name = "demoflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the repository containing the demo dbt project
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate a multi-day incremental pipeline
    Incremental(IncrementalArgs),

    /// Run the single-pass demo (no day loop, no randomness)
    Demo(DemoArgs),

    /// Clear generated seed files
    Clear(ClearArgs),
}

/// Arguments for the incremental command
#[derive(Args, Debug)]
pub struct IncrementalArgs {
    /// dbt target to run against
    #[arg(short, long)]
    pub target: String,

    /// Number of simulated days
    #[arg(short, long, default_value_t = 8)]
    pub days_back: u32,

    /// Override the dbt profiles directory (default: ~/.dbt)
    #[arg(long)]
    pub profiles_dir: Option<String>,
}

/// Arguments for the demo command
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// dbt target to run against
    #[arg(short, long)]
    pub target: String,

    /// Override the dbt profiles directory (default: ~/.dbt)
    #[arg(long)]
    pub profiles_dir: Option<String>,
}

/// Arguments for the clear command
#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Clear the validation seed files
    #[arg(long)]
    pub validation: bool,

    /// Clear the training seed files
    #[arg(long)]
    pub training: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
