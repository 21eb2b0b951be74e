//! Mock recognizer for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::recognizer::{RecognitionError, Recognizer};

/// Mock implementation of the Recognizer trait.
///
/// Returns configured text per image path, fails for configured paths and
/// records every call. Clones share state, so a clone handed to the
/// extractor can be inspected afterwards.
///
/// # Example
///
/// ```rust,ignore
/// use carousel_core::testing::MockRecognizer;
///
/// let recognizer = MockRecognizer::new();
/// recognizer.set_text("/data/alice/carousel_1/image_1.jpg", "Hello").await;
/// recognizer.set_failure("/data/alice/carousel_1/image_2.jpg").await;
///
/// // ... run the extractor ...
///
/// assert_eq!(recognizer.call_count().await, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockRecognizer {
    /// Text to return per path.
    texts: Arc<RwLock<HashMap<PathBuf, String>>>,
    /// Paths that fail recognition.
    failures: Arc<RwLock<HashSet<PathBuf>>>,
    /// Text for paths without a configured entry.
    default_text: Arc<RwLock<String>>,
    /// Recorded (path, language) calls in order.
    calls: Arc<RwLock<Vec<(PathBuf, String)>>>,
    /// If set, validate() fails.
    unavailable: Arc<RwLock<bool>>,
}

impl MockRecognizer {
    /// Create a new mock recognizer that returns empty text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text returned for a specific path.
    pub async fn set_text(&self, path: impl AsRef<Path>, text: impl Into<String>) {
        self.texts
            .write()
            .await
            .insert(path.as_ref().to_path_buf(), text.into());
    }

    /// Set the text returned for paths without a configured entry.
    pub async fn set_default_text(&self, text: impl Into<String>) {
        *self.default_text.write().await = text.into();
    }

    /// Make recognition fail for a specific path.
    pub async fn set_failure(&self, path: impl AsRef<Path>) {
        self.failures
            .write()
            .await
            .insert(path.as_ref().to_path_buf());
    }

    /// Make validate() report a missing engine.
    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }

    /// Get all recorded calls.
    pub async fn calls(&self) -> Vec<(PathBuf, String)> {
        self.calls.read().await.clone()
    }

    /// Get the number of recognize() calls.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }
}

#[async_trait]
impl Recognizer for MockRecognizer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn recognize(&self, path: &Path, language: &str) -> Result<String, RecognitionError> {
        self.calls
            .write()
            .await
            .push((path.to_path_buf(), language.to_string()));

        if self.failures.read().await.contains(path) {
            return Err(RecognitionError::failed("mock failure", None));
        }

        match self.texts.read().await.get(path) {
            Some(text) => Ok(text.clone()),
            None => Ok(self.default_text.read().await.clone()),
        }
    }

    async fn validate(&self) -> Result<(), RecognitionError> {
        if *self.unavailable.read().await {
            return Err(RecognitionError::EngineNotFound {
                path: PathBuf::from("mock"),
            });
        }
        Ok(())
    }
}
