//! Demo command - the single-pass variant
//!
//! No day loop and no randomness: seed the reference tables, clear test
//! state, then run and test training and validation once each. Assumes
//! the seed CSVs already exist in the project.

use anyhow::Result;
use demoflow_core::RunVars;
use demoflow_dbt::DbtClient;

use crate::cli::{DemoArgs, GlobalArgs};
use crate::commands::common::{demo_runner, load_layout, resolve_profiles_dir, CLEAR_TESTS_MACRO};

/// Execute the demo command
pub async fn execute(args: &DemoArgs, global: &GlobalArgs) -> Result<()> {
    let layout = load_layout(global)?;
    let profiles_dir = resolve_profiles_dir(args.profiles_dir.as_deref())?;
    let runner = demo_runner(&layout, profiles_dir, &args.target);

    run_demo(&runner).await
}

pub(crate) async fn run_demo(runner: &dyn DbtClient) -> Result<()> {
    runner.seed("ads").await?;
    runner.seed("sessions").await?;

    log::info!("Clearing demo environment");
    runner.run_operation(CLEAR_TESTS_MACRO, None).await?;

    log::info!("Seeding training data");
    runner.seed("training").await?;
    log::info!("Running training models");
    runner.run(None).await?;
    log::info!("Running tests over the training models");
    runner.test(None).await?;

    log::info!("Seeding validation data");
    runner.seed("validation").await?;
    log::info!("Running validation models");
    runner
        .run(Some(&RunVars::validation_only().to_vars()))
        .await?;
    log::info!("Running tests over the validation models");
    runner.test(None).await?;

    Ok(())
}

#[cfg(test)]
#[path = "demo_test.rs"]
mod tests;
