//! Error types for the command-line front end.

use std::path::PathBuf;

/// Errors raised while preparing a run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The config file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    ReadConfig {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The config file is not valid JSON for a [`Config`](crate::config::Config).
    #[error("Invalid config file '{path}': {source}")]
    InvalidConfig {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The statement could not be read from stdin.
    #[error("Failed to read statement from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// No statement text was given.
    #[error("No SQL statement given")]
    EmptyStatement,
}

/// Result alias for CLI setup.
pub type Result<T> = std::result::Result<T, CliError>;
