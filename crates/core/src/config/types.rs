use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::fetcher::FetcherConfig;
use crate::recognizer::RecognizerConfig;
use crate::report::ReportConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Profile URL or handle (`@alice`, `alice`, `https://host/@alice`).
    pub profile: String,
    /// Maximum number of posts to request from the source.
    #[serde(default)]
    pub max_posts: Option<usize>,
    /// Abort instead of writing an empty report when the source returns no posts.
    #[serde(default)]
    pub fail_on_empty: bool,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub download: FetcherConfig,
    #[serde(default)]
    pub ocr: RecognizerConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

/// Output locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Root directory for downloaded images.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory the Markdown report is written to.
    #[serde(default = "default_exports_dir")]
    pub exports_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            exports_dir: default_exports_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_exports_dir() -> PathBuf {
    PathBuf::from("exports")
}

/// Post source configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    /// JSON manifest listing the posts to process.
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}
