//! Error types for the fetcher module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while downloading images.
///
/// Only [`FetchError::DirectoryCreationFailed`] and
/// [`FetchError::ClientBuild`] escape [`super::ImageFetcher::fetch`]; the rest
/// are per-image and are logged instead.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Failed to create a download directory.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// The request did not complete in time.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// Transport level failure (DNS, connect, TLS, body read).
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response carried no bytes.
    #[error("Empty response body from {url}")]
    EmptyBody { url: String },

    /// Failed to write the downloaded bytes.
    #[error("Failed to write {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The concurrency limiter was closed.
    #[error("Download limiter closed")]
    LimiterClosed,
}

impl FetchError {
    /// Classifies a reqwest error for the given URL.
    pub fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Request {
                url: url.to_string(),
                source: error,
            }
        }
    }

    /// Whether this error only affects a single image.
    pub fn is_per_image(&self) -> bool {
        !matches!(
            self,
            Self::ClientBuild(_) | Self::DirectoryCreationFailed { .. } | Self::LimiterClosed
        )
    }
}
