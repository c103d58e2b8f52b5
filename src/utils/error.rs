//! Error handling for Medialoader

use thiserror::Error;

/// Main error type for Medialoader
#[derive(Debug, Error)]
pub enum MedialoaderError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("URL is empty")]
    EmptyUrl,

    #[error("Failed to extract media info: {0}")]
    ExtractionError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}
