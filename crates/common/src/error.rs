use thiserror::Error;

/// Top-level error type for Atlas operations.
#[derive(Debug, Error)]
pub enum AtlasError {
    // --- Fatal for the document (surfaced to the uploader) ---
    #[error("Could not read document: {0}")]
    Decode(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    // --- Operational errors ---
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(String),
}

impl AtlasError {
    /// Whether the uploader can fix this by retrying with a different file.
    pub fn is_document_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Timeout(_))
    }
}

/// Result type alias for Atlas operations.
pub type Result<T> = std::result::Result<T, AtlasError>;
