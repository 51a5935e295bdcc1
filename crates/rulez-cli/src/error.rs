//! Error handling for the CLI tools

/// Errors raised while reading words or writing results.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON record could not be serialized.
    #[error("failed to serialize JSON record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
