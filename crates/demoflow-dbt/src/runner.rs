//! Subprocess-backed dbt runner

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{DbtError, DbtResult};
use crate::traits::{DbtClient, Vars};

/// Runs dbt as a child process against a single project directory.
///
/// With `raise_on_failure` unset, non-zero exits are logged and reported
/// as `Ok(false)` so a long demo keeps moving past flaky steps; launch
/// failures (missing executable) always propagate.
#[derive(Debug, Clone)]
pub struct DbtRunner {
    project_dir: PathBuf,
    profiles_dir: Option<PathBuf>,
    target: Option<String>,
    raise_on_failure: bool,
    executable: String,
}

impl DbtRunner {
    pub fn new(
        project_dir: impl Into<PathBuf>,
        profiles_dir: Option<PathBuf>,
        target: Option<String>,
        raise_on_failure: bool,
    ) -> Self {
        Self {
            project_dir: project_dir.into(),
            profiles_dir,
            target,
            raise_on_failure,
            executable: "dbt".to_string(),
        }
    }

    /// Override the executable name (tests use shell builtins)
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Flags shared by every invocation: project dir, then the optional
    /// profiles dir and target.
    fn global_flags(&self) -> Vec<String> {
        let mut flags = vec![
            "--project-dir".to_string(),
            self.project_dir.display().to_string(),
        ];
        if let Some(profiles_dir) = &self.profiles_dir {
            flags.push("--profiles-dir".to_string());
            flags.push(profiles_dir.display().to_string());
        }
        if let Some(target) = &self.target {
            flags.push("--target".to_string());
            flags.push(target.clone());
        }
        flags
    }

    pub(crate) fn seed_args(&self, select: &str) -> Vec<String> {
        let mut args = vec!["seed".to_string(), "--select".to_string(), select.to_string()];
        args.extend(self.global_flags());
        args
    }

    pub(crate) fn run_args(&self, vars: Option<&Vars>) -> DbtResult<Vec<String>> {
        self.command_with_vars("run", vars)
    }

    pub(crate) fn test_args(&self, vars: Option<&Vars>) -> DbtResult<Vec<String>> {
        self.command_with_vars("test", vars)
    }

    pub(crate) fn run_operation_args(
        &self,
        macro_name: &str,
        macro_args: Option<&Vars>,
    ) -> DbtResult<Vec<String>> {
        let mut args = vec!["run-operation".to_string(), macro_name.to_string()];
        if let Some(macro_args) = macro_args {
            args.push("--args".to_string());
            args.push(serde_json::to_string(macro_args)?);
        }
        args.extend(self.global_flags());
        Ok(args)
    }

    fn command_with_vars(&self, command: &str, vars: Option<&Vars>) -> DbtResult<Vec<String>> {
        let mut args = vec![command.to_string()];
        if let Some(vars) = vars {
            args.push("--vars".to_string());
            args.push(serde_json::to_string(vars)?);
        }
        args.extend(self.global_flags());
        Ok(args)
    }

    async fn invoke(&self, args: Vec<String>) -> DbtResult<bool> {
        let command = format!("{} {}", self.executable, args.join(" "));
        log::debug!("Invoking: {command}");

        let output = tokio::process::Command::new(&self.executable)
            .args(&args)
            .output()
            .await
            .map_err(|e| DbtError::Spawn {
                command: command.clone(),
                source: e,
            })?;

        if output.status.success() {
            log::debug!("Succeeded: {command}");
            return Ok(true);
        }

        let exit_code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if self.raise_on_failure {
            return Err(DbtError::CommandFailed {
                command,
                exit_code,
                stderr,
            });
        }

        log::warn!("dbt step failed (exit {exit_code}), continuing: {command}");
        if !stderr.is_empty() {
            log::warn!("{stderr}");
        }
        Ok(false)
    }
}

#[async_trait]
impl DbtClient for DbtRunner {
    async fn seed(&self, select: &str) -> DbtResult<bool> {
        self.invoke(self.seed_args(select)).await
    }

    async fn run(&self, vars: Option<&Vars>) -> DbtResult<bool> {
        self.invoke(self.run_args(vars)?).await
    }

    async fn test(&self, vars: Option<&Vars>) -> DbtResult<bool> {
        self.invoke(self.test_args(vars)?).await
    }

    async fn run_operation(&self, macro_name: &str, args: Option<&Vars>) -> DbtResult<bool> {
        self.invoke(self.run_operation_args(macro_name, args)?).await
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
