//! Error types for demoflow-dbt

use thiserror::Error;

/// dbt client error type
#[derive(Error, Debug)]
pub enum DbtError {
    /// The dbt executable could not be launched at all
    #[error("Failed to launch '{command}': {source} — is dbt installed?")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// dbt exited non-zero and the runner is configured to raise
    #[error("dbt command failed (exit {exit_code}): {command}\n{stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// Run variables could not be serialized for --vars / --args
    #[error("Failed to serialize run variables: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for DbtError
pub type DbtResult<T> = Result<T, DbtError>;
