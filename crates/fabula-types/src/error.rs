use thiserror::Error;

use crate::llm::LlmError;

/// Errors related to chat session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,

    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("generation failed: {0}")]
    Generation(#[from] LlmError),
}

/// Errors related to story catalog operations.
#[derive(Debug, Error)]
pub enum StoryError {
    #[error("story not found")]
    NotFound,

    #[error("field {0} is required")]
    MissingField(&'static str),
}

/// Errors raised while assembling configuration at startup. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingCredential(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
