//! Trait definitions for the recognizer module.

use async_trait::async_trait;
use std::path::Path;

use super::error::RecognitionError;

/// An engine that extracts text from an image file.
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Returns the name of this recognizer implementation.
    fn name(&self) -> &str;

    /// Returns the raw text found in the image at `path`.
    ///
    /// `language` is an engine-specific hint such as `eng`.
    async fn recognize(&self, path: &Path, language: &str) -> Result<String, RecognitionError>;

    /// Validates that the engine is installed and usable.
    async fn validate(&self) -> Result<(), RecognitionError>;
}
