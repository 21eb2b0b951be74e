//! Error types for the recognizer module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during text recognition.
#[derive(Debug, Error)]
pub enum RecognitionError {
    /// Engine binary not found.
    #[error("Recognition engine not found at path: {path}")]
    EngineNotFound { path: PathBuf },

    /// Input image not found.
    #[error("Input image not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Input image has no content.
    #[error("Input image is empty: {path}")]
    EmptyInput { path: PathBuf },

    /// The engine ran but reported a failure.
    #[error("Recognition failed: {reason}")]
    Failed {
        reason: String,
        stderr: Option<String>,
    },

    /// Recognition timed out.
    #[error("Recognition timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error while talking to the engine.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecognitionError {
    /// Creates a new failure with optional stderr output.
    pub fn failed(reason: impl Into<String>, stderr: Option<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
            stderr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_constructor() {
        let err = RecognitionError::failed("exit code 1", Some("bad image".to_string()));
        assert_eq!(err.to_string(), "Recognition failed: exit code 1");
        assert!(matches!(err, RecognitionError::Failed { stderr: Some(_), .. }));
    }
}
