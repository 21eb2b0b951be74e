//! Tesseract-based recognizer implementation.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

use super::config::RecognizerConfig;
use super::error::RecognitionError;
use super::traits::Recognizer;

/// Recognizer that runs the `tesseract` binary once per image.
pub struct TesseractRecognizer {
    config: RecognizerConfig,
}

impl TesseractRecognizer {
    /// Creates a new Tesseract recognizer with the given configuration.
    pub fn new(config: RecognizerConfig) -> Self {
        Self { config }
    }

    /// Creates a recognizer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RecognizerConfig::default())
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Builds tesseract arguments; text goes to stdout.
    fn build_args(&self, input_path: &Path, language: &str) -> Vec<String> {
        let mut args = vec![
            input_path.to_string_lossy().to_string(),
            "stdout".to_string(),
            "-l".to_string(),
            language.to_string(),
        ];

        if let Some(psm) = self.config.page_segmentation_mode {
            args.extend(["--psm".to_string(), psm.to_string()]);
        }

        args.extend(self.config.extra_args.iter().cloned());

        args
    }

    fn spawn_error(&self, e: std::io::Error) -> RecognitionError {
        if e.kind() == std::io::ErrorKind::NotFound {
            RecognitionError::EngineNotFound {
                path: self.config.tesseract_path.clone(),
            }
        } else {
            RecognitionError::Io(e)
        }
    }
}

#[async_trait]
impl Recognizer for TesseractRecognizer {
    fn name(&self) -> &str {
        "tesseract"
    }

    async fn recognize(&self, path: &Path, language: &str) -> Result<String, RecognitionError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| RecognitionError::InputNotFound {
                path: path.to_path_buf(),
            })?;

        if metadata.len() == 0 {
            return Err(RecognitionError::EmptyInput {
                path: path.to_path_buf(),
            });
        }

        let args = self.build_args(path, language);
        debug!(path = %path.display(), language, "Running tesseract");

        let child = Command::new(&self.config.tesseract_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let timeout_duration = Duration::from_secs(self.config.timeout_secs);
        let output = match timeout(timeout_duration, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(RecognitionError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                })
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RecognitionError::failed(
                format!("tesseract exited with code: {:?}", output.status.code()),
                if stderr.is_empty() { None } else { Some(stderr) },
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn validate(&self) -> Result<(), RecognitionError> {
        let output = Command::new(&self.config.tesseract_path)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            return Err(RecognitionError::failed(
                "tesseract --version failed",
                Some(String::from_utf8_lossy(&output.stderr).to_string()),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn recognizer_at(path: &str) -> TesseractRecognizer {
        TesseractRecognizer::new(RecognizerConfig {
            tesseract_path: PathBuf::from(path),
            ..Default::default()
        })
    }

    fn image_in(dir: &TempDir, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join("image_1.png");
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_build_args_defaults() {
        let recognizer = TesseractRecognizer::with_defaults();
        let args = recognizer.build_args(Path::new("/tmp/a.png"), "eng");
        assert_eq!(args, vec!["/tmp/a.png", "stdout", "-l", "eng"]);
    }

    #[test]
    fn test_build_args_with_psm_and_extra() {
        let recognizer = TesseractRecognizer::new(RecognizerConfig {
            page_segmentation_mode: Some(6),
            extra_args: vec!["--oem".to_string(), "1".to_string()],
            ..Default::default()
        });
        let args = recognizer.build_args(Path::new("a.png"), "deu");
        assert_eq!(args, vec!["a.png", "stdout", "-l", "deu", "--psm", "6", "--oem", "1"]);
    }

    #[tokio::test]
    async fn test_missing_input() {
        let recognizer = TesseractRecognizer::with_defaults();
        let result = recognizer
            .recognize(Path::new("/nonexistent/image.png"), "eng")
            .await;
        assert!(matches!(result, Err(RecognitionError::InputNotFound { .. })));
    }

    #[tokio::test]
    async fn test_empty_input_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = image_in(&dir, b"");
        let recognizer = TesseractRecognizer::with_defaults();
        let result = recognizer.recognize(&path, "eng").await;
        assert!(matches!(result, Err(RecognitionError::EmptyInput { .. })));
    }

    #[tokio::test]
    async fn test_engine_not_found() {
        let dir = TempDir::new().unwrap();
        let path = image_in(&dir, b"data");
        let recognizer = recognizer_at("/nonexistent/bin/tesseract");

        let result = recognizer.recognize(&path, "eng").await;
        assert!(matches!(result, Err(RecognitionError::EngineNotFound { .. })));

        let result = recognizer.validate().await;
        assert!(matches!(result, Err(RecognitionError::EngineNotFound { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_stdout_is_returned() {
        if !Path::new("/bin/echo").exists() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let path = image_in(&dir, b"data");
        let recognizer = recognizer_at("/bin/echo");

        let text = recognizer.recognize(&path, "eng").await.unwrap();
        assert_eq!(text.trim(), format!("{} stdout -l eng", path.display()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        if !Path::new("/bin/false").exists() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let path = image_in(&dir, b"data");
        let recognizer = recognizer_at("/bin/false");

        let result = recognizer.recognize(&path, "eng").await;
        assert!(matches!(result, Err(RecognitionError::Failed { .. })));
    }
}
