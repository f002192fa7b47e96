//! Error types for demoflow-core

use thiserror::Error;

/// Core error type for demoflow
#[derive(Error, Debug)]
pub enum CoreError {
    /// Repository root does not exist or is not a directory
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: String },

    /// Home directory could not be resolved for the default profiles dir
    #[error("Could not resolve the home directory (HOME is unset)")]
    HomeNotFound,

    /// IO error with file path context
    #[error("Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid glob pattern over a seed directory
    #[error("Invalid seed glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
