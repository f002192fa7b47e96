//! Shared utilities for CLI commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use demoflow_core::{layout, ProjectLayout};
use demoflow_dbt::DbtRunner;

use crate::cli::GlobalArgs;

/// Macro clearing previously injected test state in the demo project
pub(crate) const CLEAR_TESTS_MACRO: &str = "jaffle_shop_online.clear_tests";

/// Load the project layout from the directory in the global CLI arguments.
pub(crate) fn load_layout(global: &GlobalArgs) -> Result<ProjectLayout> {
    ProjectLayout::new(&global.project_dir).context("Failed to load project layout")
}

/// Resolve the profiles directory: explicit override or `$HOME/.dbt`.
pub(crate) fn resolve_profiles_dir(override_dir: Option<&str>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => layout::default_profiles_dir().context("Failed to resolve the profiles directory"),
    }
}

/// The non-raising runner driving the demo dbt project.
///
/// Step failures are logged and skipped so a long demo keeps moving.
pub(crate) fn demo_runner(
    layout: &ProjectLayout,
    profiles_dir: PathBuf,
    target: &str,
) -> DbtRunner {
    DbtRunner::new(
        layout.dbt_project_dir(),
        Some(profiles_dir),
        Some(target.to_string()),
        false,
    )
}

/// The raising runner driving the injection dbt project.
///
/// Injection failures abort: the demo's final state depends on them.
/// Uses the default profiles directory, not the demo override.
pub(crate) fn injection_runner(layout: &ProjectLayout, target: &str) -> DbtRunner {
    DbtRunner::new(
        layout.injection_project_dir(),
        None,
        Some(target.to_string()),
        true,
    )
}
