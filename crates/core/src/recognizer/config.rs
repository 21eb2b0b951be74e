//! Configuration for the recognizer module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for text recognition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Language hint passed to the engine (Tesseract codes, e.g. `eng`, `eng+deu`).
    #[serde(default = "default_language")]
    pub language: String,

    /// Path to the tesseract binary.
    #[serde(default = "default_tesseract_path")]
    pub tesseract_path: PathBuf,

    /// Timeout for a single image in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Tesseract page segmentation mode (`--psm`). Engine default when unset.
    #[serde(default)]
    pub page_segmentation_mode: Option<u8>,

    /// Additional tesseract arguments, appended before the output options.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_tesseract_path() -> PathBuf {
    PathBuf::from("tesseract")
}

fn default_timeout() -> u64 {
    120
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            tesseract_path: default_tesseract_path(),
            timeout_secs: default_timeout(),
            page_segmentation_mode: None,
            extra_args: Vec::new(),
        }
    }
}
