//! Error types for demoflow-data

use thiserror::Error;

/// Data generation error type
#[derive(Error, Debug)]
pub enum DataError {
    /// Seed directory could not be created
    #[error("Failed to create seed directory '{path}': {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    /// Seed file could not be written
    #[error("Failed to write seed file '{path}': {source}")]
    WriteSeed {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for DataError
pub type DataResult<T> = Result<T, DataError>;
