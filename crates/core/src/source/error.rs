//! Error types for the source module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while obtaining posts.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Manifest file does not exist.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Manifest could not be decoded.
    #[error("Failed to parse manifest: {reason}")]
    Parse { reason: String },

    /// The upstream service could not be reached or refused the request.
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
