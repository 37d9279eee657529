//! Conversion error types
//!
//! Every error is fatal for the document being converted: there is no
//! per-token recovery and nothing is emitted once one of these is raised.

use thiserror::Error;

/// Errors raised while converting pipeline output
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A surface unit has no resolvable start-character offset
    #[error("token '{text}' is missing start_char information")]
    MissingOffset {
        /// Surface text of the offending token
        text: String,
    },

    /// The input could not be opened or decoded as UTF-8
    #[error("failed to read input {origin}: {reason}")]
    InputRead {
        /// Path of the input file
        origin: String,
        /// Underlying I/O or decoding failure
        reason: String,
    },

    /// The pipeline output parsed as JSON but does not have the expected shape
    #[error("malformed {pipeline} output: {reason}")]
    MalformedInput {
        /// Pipeline whose output was being read
        pipeline: &'static str,
        /// What was wrong, naming the token where possible
        reason: String,
    },

    /// The input is not valid JSON for the pipeline's serialization
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No pipeline profile exists for the requested name
    #[error("unknown pipeline: {0}")]
    UnknownPipeline(String),

    /// Invalid converter or profile configuration
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ConvertError {
    pub(crate) fn malformed(pipeline: &'static str, reason: impl Into<String>) -> Self {
        ConvertError::MalformedInput {
            pipeline,
            reason: reason.into(),
        }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
