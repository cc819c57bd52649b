//! Error types for swarm-convert

use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Conversion error types
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A wire value is structurally invalid (bad timestamp, duration or encoding)
    #[error("Format error: {0}")]
    Format(String),

    #[error("platform and architecture is not supported")]
    NotSupportedPlatform,

    #[error("Unknown object kind: {0}")]
    UnknownKind(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Returns true for malformed wire or request values
    pub fn is_format(&self) -> bool {
        matches!(self, ConvertError::Format(_))
    }
}
