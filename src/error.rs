//! Error types for Kaizen
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Kaizen
#[derive(Debug, Error)]
pub enum KaizenError {
    /// LLM API error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Prompt template rendering error
    #[error("Template error: {0}")]
    Template(String),

    /// Code execution error (spawn failure, timeout)
    #[error("Execution error: {0}")]
    Exec(String),

    /// Unusable user or model input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Kaizen operations
pub type Result<T> = std::result::Result<T, KaizenError>;
