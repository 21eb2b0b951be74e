//! Error type for pipeline runs.

use thiserror::Error;

use crate::fetcher::FetchError;
use crate::report::ReportError;
use crate::source::SourceError;

/// Errors that end a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The profile reference does not contain a usable handle.
    #[error("Invalid profile reference: {0}")]
    Resolution(String),

    /// The source returned no posts and empty runs are not allowed.
    #[error("No carousel posts found for @{username}")]
    NoPosts { username: String },

    /// The post source failed.
    #[error("Failed to fetch posts: {0}")]
    Source(#[from] SourceError),

    /// Download setup failed (client or directories).
    #[error("Download phase failed: {0}")]
    Fetch(#[from] FetchError),

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Report(#[from] ReportError),
}

impl PipelineError {
    /// Name of the phase the error belongs to.
    pub fn phase(&self) -> &'static str {
        match self {
            Self::Resolution(_) => "resolution",
            Self::NoPosts { .. } | Self::Source(_) => "source",
            Self::Fetch(_) => "download",
            Self::Report(_) => "report",
        }
    }
}
