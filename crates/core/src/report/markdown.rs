//! Markdown rendering and writing.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::metrics::REPORTS_WRITTEN;
use crate::model::{CarouselImage, CarouselPost};

use super::config::ReportConfig;
use super::error::ReportError;
use super::summary::ReportSummary;

/// Shown instead of a path when the image was not downloaded.
pub const DOWNLOAD_FAILED_PLACEHOLDER: &str = "(download failed)";

/// Shown instead of text when none was extracted.
pub const NO_TEXT_PLACEHOLDER: &str = "(no text detected)";

/// Heading text for posts with a blank caption.
pub const NO_CAPTION_PLACEHOLDER: &str = "No caption";

/// Collapses a caption onto one trimmed line, or returns the placeholder.
pub fn sanitize_caption(caption: &str) -> String {
    let collapsed = caption.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        NO_CAPTION_PLACEHOLDER.to_string()
    } else {
        collapsed
    }
}

/// Builds and writes the Markdown report.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    config: ReportConfig,
}

impl ReportAssembler {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Path the report for `username` is written to.
    pub fn output_path(&self, username: &str, output_dir: &Path) -> PathBuf {
        output_dir.join(self.config.file_name(username))
    }

    /// Renders the full document.
    pub fn render(&self, username: &str, posts: &[CarouselPost]) -> String {
        let mut lines: Vec<String> = vec![
            format!("# {} Profile: @{}", self.config.platform_name, username),
            String::new(),
        ];

        for (position, post) in posts.iter().enumerate() {
            lines.push(format!(
                "## Carousel {}: \"{}\"",
                position + 1,
                sanitize_caption(post.caption())
            ));
            for image in post.images() {
                render_image(&mut lines, image);
            }
            lines.push(String::new());
            lines.push("---".to_string());
            lines.push(String::new());
        }

        let summary = ReportSummary::from_posts(posts);
        lines.push("### Summary".to_string());
        lines.push(format!("- Total carousels: {}", summary.total_posts));
        lines.push(format!("- Total images: {}", summary.total_images));
        lines.push(format!(
            "- Average OCR text length: {} words/image",
            summary.average_words_per_image
        ));
        lines.push(String::new());

        lines.join("\n")
    }

    /// Renders the report and writes it to `output_dir`, replacing any
    /// previous version.
    ///
    /// The content goes to a temporary file in the same directory first and
    /// is renamed into place, so readers never see a partial report.
    pub async fn assemble(
        &self,
        username: &str,
        posts: &[CarouselPost],
        output_dir: &Path,
    ) -> Result<PathBuf, ReportError> {
        tokio::fs::create_dir_all(output_dir)
            .await
            .map_err(|source| ReportError::DirectoryCreationFailed {
                path: output_dir.to_path_buf(),
                source,
            })?;

        let output_path = self.output_path(username, output_dir);
        let temp_path = output_dir.join(format!(".{}.tmp", self.config.file_name(username)));
        let content = self.render(username, posts);

        if let Err(source) = tokio::fs::write(&temp_path, content.as_bytes()).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(ReportError::WriteFailed {
                path: temp_path,
                source,
            });
        }
        debug!(path = %temp_path.display(), bytes = content.len(), "Report rendered");

        if let Err(source) = tokio::fs::rename(&temp_path, &output_path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(ReportError::WriteFailed {
                path: output_path,
                source,
            });
        }

        REPORTS_WRITTEN.inc();
        info!(path = %output_path.display(), posts = posts.len(), "Report written");

        Ok(output_path)
    }
}

fn render_image(lines: &mut Vec<String>, image: &CarouselImage) {
    let location = image
        .local_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| DOWNLOAD_FAILED_PLACEHOLDER.to_string());

    lines.push(format!("- Image {}: `{}`", image.index(), location));
    lines.push("  - **Extracted text:**".to_string());
    let text = image.extracted_text().filter(|text| !text.is_empty());
    let fence = code_fence(text.unwrap_or_default());
    lines.push(format!("    {}", fence));
    match text {
        Some(text) => lines.extend(text.split('\n').map(|line| format!("    {}", line))),
        None => lines.push(format!("    {}", NO_TEXT_PLACEHOLDER)),
    }
    lines.push(format!("    {}", fence));
}

/// Backtick fence longer than any backtick run inside `text`, at least three.
fn code_fence(text: &str) -> String {
    let longest_run = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest_run.max(2) + 1)
}
