//! Command-line arguments and their mapping onto configuration overrides.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

/// Extract on-image text from a profile's photo carousels into a Markdown report.
#[derive(Debug, Parser)]
#[command(name = "carousel-xtractor")]
#[command(version)]
pub struct Cli {
    /// Profile URL or username (e.g. https://www.tiktok.com/@alice or @alice)
    pub profile: Option<String>,

    /// TOML configuration file
    #[arg(short, long, env = "CAROUSEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON manifest listing the profile's posts
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Maximum number of carousel posts to process
    #[arg(long)]
    pub max_posts: Option<usize>,

    /// Directory that receives downloaded images
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory that receives the Markdown report
    #[arg(long)]
    pub exports_dir: Option<PathBuf>,

    /// Tesseract language code
    #[arg(long)]
    pub ocr_language: Option<String>,

    /// Per-image download timeout in seconds
    #[arg(long)]
    pub download_timeout: Option<u64>,

    /// Maximum simultaneous image downloads
    #[arg(long)]
    pub download_concurrency: Option<usize>,

    /// Exit with an error when the profile has no carousel posts
    #[arg(long)]
    pub fail_on_empty: bool,

    /// List the posts as JSON without downloading anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print Prometheus metrics after the run
    #[arg(long)]
    pub print_metrics: bool,
}

/// Highest-priority configuration layer built from the command line.
///
/// Unset options are skipped so file and environment values stay in effect.
#[derive(Debug, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_posts: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fail_on_empty: Option<bool>,
    paths: PathOverrides,
    download: DownloadOverrides,
    ocr: OcrOverrides,
    source: SourceOverrides,
}

#[derive(Debug, Default, Serialize)]
struct PathOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exports_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize)]
struct DownloadOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    concurrency: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Serialize)]
struct OcrOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

#[derive(Debug, Default, Serialize)]
struct SourceOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    manifest: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            profile: self.profile.clone(),
            max_posts: self.max_posts,
            fail_on_empty: self.fail_on_empty.then_some(true),
            paths: PathOverrides {
                data_dir: self.data_dir.clone(),
                exports_dir: self.exports_dir.clone(),
            },
            download: DownloadOverrides {
                concurrency: self.download_concurrency,
                timeout_secs: self.download_timeout,
            },
            ocr: OcrOverrides {
                language: self.ocr_language.clone(),
            },
            source: SourceOverrides {
                manifest: self.manifest.clone(),
            },
        }
    }
}
