//! Pipeline runner implementation.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};

use crate::config::Config;
use crate::extractor::{ExtractionSummary, TextExtractor};
use crate::fetcher::{FetchSummary, ImageFetcher};
use crate::model::CarouselPost;
use crate::recognizer::Recognizer;
use crate::report::{ReportAssembler, ReportSummary};
use crate::source::PostSource;

use super::error::PipelineError;
use super::username::resolve_username;

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    /// Username the run was resolved to.
    pub username: String,
    /// Location of the written report.
    pub report_path: PathBuf,
    /// Posts with download and extraction results recorded.
    pub posts: Vec<CarouselPost>,
    pub fetch: FetchSummary,
    pub extraction: ExtractionSummary,
    pub report: ReportSummary,
}

/// Runs the fetch, extract and report phases for one profile.
pub struct CarouselPipeline<S: PostSource, R: Recognizer> {
    config: Config,
    source: S,
    fetcher: ImageFetcher,
    extractor: TextExtractor<R>,
    assembler: ReportAssembler,
}

impl<S: PostSource, R: Recognizer> CarouselPipeline<S, R> {
    /// Creates a pipeline, building the HTTP client from `config.download`.
    pub fn new(config: Config, source: S, recognizer: R) -> Result<Self, PipelineError> {
        let fetcher = ImageFetcher::new(config.download.clone())?;
        let assembler = ReportAssembler::new(config.report.clone());
        Ok(Self {
            config,
            source,
            fetcher,
            extractor: TextExtractor::new(recognizer),
            assembler,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn fetcher(&self) -> &ImageFetcher {
        &self.fetcher
    }

    /// Resolves the profile and lists its posts without downloading anything.
    pub async fn list_posts(&self) -> Result<Vec<CarouselPost>, PipelineError> {
        let username = resolve_username(&self.config.profile)?;
        let span = info_span!("list_posts", username = %username);
        self.fetch_posts(&username).instrument(span).await
    }

    /// Executes one complete run.
    ///
    /// The username is resolved before any network or filesystem access.
    pub async fn run(&self) -> Result<PipelineResult, PipelineError> {
        let username = resolve_username(&self.config.profile)?;
        let span = info_span!("pipeline", username = %username);
        self.run_for(username).instrument(span).await
    }

    async fn run_for(&self, username: String) -> Result<PipelineResult, PipelineError> {
        let mut posts = self.fetch_posts(&username).await?;
        if posts.is_empty() {
            warn!("No carousel posts found");
            if self.config.fail_on_empty {
                return Err(PipelineError::NoPosts { username });
            }
        }

        let fetch = self
            .fetcher
            .fetch(&mut posts, &self.config.paths.data_dir, &username)
            .await?;

        info!("Running OCR on downloaded images");
        let extraction = self
            .extractor
            .process_posts(&mut posts, &self.config.ocr.language)
            .await;

        info!("Generating Markdown export");
        let report_path = self
            .assembler
            .assemble(&username, &posts, &self.config.paths.exports_dir)
            .await?;
        let report = ReportSummary::from_posts(&posts);

        info!(
            path = %report_path.display(),
            posts = report.total_posts,
            images = report.total_images,
            words = report.total_words,
            "Export written"
        );

        Ok(PipelineResult {
            username,
            report_path,
            posts,
            fetch,
            extraction,
            report,
        })
    }

    async fn fetch_posts(&self, username: &str) -> Result<Vec<CarouselPost>, PipelineError> {
        info!(
            source = self.source.name(),
            max_posts = ?self.config.max_posts,
            "Fetching carousel posts"
        );
        let mut posts = self
            .source
            .fetch_posts(username, self.config.max_posts)
            .await?;
        for (position, post) in posts.iter_mut().enumerate() {
            post.ensure_id(username, position + 1);
        }
        info!(posts = posts.len(), "Fetched carousel posts");
        Ok(posts)
    }
}
