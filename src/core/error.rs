//! Error types and error handling for the seekbase service.
//!
//! This module defines the error types used throughout the
//! application. CLI-specific exit-code mapping is handled in the
//! adapter module.

use thiserror::Error;

/// Result type alias for seekbase operations
pub type Result<T> = std::result::Result<T, SeekbaseError>;

/// Main error type for the seekbase service
#[derive(Error, Debug)]
pub enum SeekbaseError {
    /// Save precondition: the index document has no id. Fatal,
    /// never retried, the backend is not invoked.
    #[error("Index document cannot be saved - no id set")]
    MissingDocumentId,

    /// Backend writes kept failing across every retry attempt.
    /// The original cause is preserved as the error source.
    #[error("Backend save failed after {attempts} attempts: {source}")]
    SaveRetriesExhausted {
        attempts: usize,
        #[source]
        source: Box<SeekbaseError>,
    },

    /// An asset metadata entry references a type with no registered
    /// extractor. Logged and skipped per entry, never fatal.
    #[error("Asset metadata type not supported: {0}")]
    UnsupportedMetadataType(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SeekbaseError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SeekbaseError::DocumentNotFound(_))
    }

    /// Check if this is a precondition violation (caller error,
    /// retrying cannot help)
    pub fn is_precondition(&self) -> bool {
        matches!(self, SeekbaseError::MissingDocumentId)
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SeekbaseError::InvalidQuery(_)
                | SeekbaseError::ConfigError(_)
                | SeekbaseError::MissingDocumentId
        )
    }
}
