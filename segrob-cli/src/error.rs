//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file content is invalid
    ConfigError(String),
    /// A canonical document failed validation
    InvalidDocument {
        /// Document path
        path: String,
        /// Number of violations found
        violations: usize,
    },
    /// Output could not be written
    OutputError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidDocument { path, violations } => {
                write!(f, "Invalid document {path}: {violations} violation(s)")
            }
            CliError::OutputError(msg) => write!(f, "Output error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
