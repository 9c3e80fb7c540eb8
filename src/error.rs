use std::io;

use crate::submission::ValidationError;

/// Custom error type for dockerfly_form operations
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer from the deployment server. Displays the derived message only.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("HTTP {status} {status_text}: {body}")]
    UnreadableResponse {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl FormError {
    /// True for errors that happen before any request leaves the process.
    pub fn is_validation(&self) -> bool {
        matches!(self, FormError::Validation(_))
    }
}

/// Helper type for Results that use FormError
pub type Result<T> = std::result::Result<T, FormError>;
