//! Incremental demo command - simulate a multi-day pipeline
//!
//! Each simulated day seeds freshly generated data and drives dbt through
//! run and test. Most days only touch the training data; some days also
//! exercise the validation path, decided by the validation policy. The
//! demo finishes with a large validation batch at the real current time
//! and a round of synthetic test injection.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use demoflow_core::{clear_data, ProjectLayout, RandomValidationPolicy, RunVars, ValidationPolicy};
use demoflow_data::{
    generate_training_data, generate_validation_data, inject_demo_tests, FINAL_VALIDATION_ROWS,
    VALIDATION_ROWS_PER_DAY,
};
use demoflow_dbt::DbtClient;

use crate::cli::{GlobalArgs, IncrementalArgs};
use crate::commands::common::{
    demo_runner, injection_runner, load_layout, resolve_profiles_dir, CLEAR_TESTS_MACRO,
};

/// Execute the incremental command
pub async fn execute(args: &IncrementalArgs, global: &GlobalArgs) -> Result<()> {
    let layout = load_layout(global)?;
    let profiles_dir = resolve_profiles_dir(args.profiles_dir.as_deref())?;

    let runner = demo_runner(&layout, profiles_dir, &args.target);
    let injection = injection_runner(&layout, &args.target);
    let mut policy = RandomValidationPolicy::new(args.days_back);

    run_incremental_demo(
        &runner,
        &injection,
        &layout,
        args.days_back,
        &mut policy,
        Utc::now(),
    )
    .await
}

/// Drive the full incremental demo.
///
/// The loop bound is exclusive: `days_back` yields `days_back - 1`
/// simulated days, the earliest `days_back - 1` days before `now`.
pub(crate) async fn run_incremental_demo(
    runner: &dyn DbtClient,
    injection_runner: &dyn DbtClient,
    layout: &ProjectLayout,
    days_back: u32,
    policy: &mut dyn ValidationPolicy,
    now: DateTime<Utc>,
) -> Result<()> {
    log::info!("Clearing demo environment");
    runner.run_operation(CLEAR_TESTS_MACRO, None).await?;
    clear_data(layout, true, true)?;

    runner.seed("ads").await?;
    runner.seed("sessions").await?;

    log::info!("Running incremental demo for {days_back} days back");
    let mut first_run = true;
    for run_index in 1..days_back {
        println!("Running the [{run_index}/{days_back}] day.");
        let custom_run_time = now - Duration::days(i64::from(days_back - run_index));

        if !first_run && policy.include_validation(run_index) {
            run_validation_day(runner, layout, custom_run_time).await?;
        } else {
            run_training_day(runner, layout, custom_run_time).await?;
        }
        first_run = false;
    }

    // Final, larger validation batch at the real current time
    clear_data(layout, true, false)?;
    generate_validation_data(layout, now, FINAL_VALIDATION_ROWS, true)?;
    runner.seed("validation").await?;
    runner
        .run(Some(&RunVars::data_load(now).with_validation().to_vars()))
        .await?;
    runner
        .test(Some(&RunVars::data_test(now).with_validation().to_vars()))
        .await?;

    inject_demo_tests(injection_runner).await?;
    Ok(())
}

/// Training-only day: generate, seed, run, test.
async fn run_training_day(
    runner: &dyn DbtClient,
    layout: &ProjectLayout,
    run_time: DateTime<Utc>,
) -> Result<()> {
    generate_training_data(layout, run_time)?;
    runner.seed("training").await?;
    runner
        .run(Some(&RunVars::data_load(run_time).to_vars()))
        .await?;
    runner
        .test(Some(&RunVars::data_test(run_time).to_vars()))
        .await?;
    Ok(())
}

/// Validation + training day.
///
/// Validation seeds are cleared before each generation, never appended.
/// The trailing training half runs without a test step.
async fn run_validation_day(
    runner: &dyn DbtClient,
    layout: &ProjectLayout,
    run_time: DateTime<Utc>,
) -> Result<()> {
    clear_data(layout, true, false)?;
    generate_validation_data(layout, run_time, VALIDATION_ROWS_PER_DAY, false)?;
    runner.seed("validation").await?;
    runner
        .run(Some(&RunVars::data_load(run_time).with_validation().to_vars()))
        .await?;
    runner
        .test(Some(&RunVars::data_test(run_time).with_validation().to_vars()))
        .await?;

    clear_data(layout, true, false)?;
    generate_training_data(layout, run_time)?;
    runner.seed("training").await?;
    runner
        .run(Some(&RunVars::data_load(run_time).to_vars()))
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "incremental_test.rs"]
mod tests;
