//! Error types for the report module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to create the output directory.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the report file.
    #[error("Failed to write report: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
