//! Extractor module: runs text recognition over downloaded images.
//!
//! Images are processed one by one in carousel order. An image without a
//! local path is skipped and keeps `extracted_text == None`; a recognition
//! failure is logged and recorded as `Some("")`, so the report can tell
//! "never attempted" apart from "attempted, nothing found".

mod normalize;

pub use normalize::normalize_text;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::metrics::RECOGNITIONS_TOTAL;
use crate::model::{CarouselImage, CarouselPost};
use crate::recognizer::Recognizer;

/// Counts for one extraction phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    /// Images handed to the recognizer successfully.
    pub processed: usize,
    /// Images without a local path.
    pub skipped: usize,
    /// Images whose recognition failed.
    pub failed: usize,
    /// Words across all extracted text.
    pub total_words: usize,
}

impl ExtractionSummary {
    fn merge(&mut self, other: ExtractionSummary) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.failed += other.failed;
        self.total_words += other.total_words;
    }
}

/// Drives a [`Recognizer`] over carousel images.
pub struct TextExtractor<R: Recognizer> {
    recognizer: R,
}

impl<R: Recognizer> TextExtractor<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Extracts text for every downloaded image, in order.
    pub async fn process(&self, images: &mut [CarouselImage], language: &str) -> ExtractionSummary {
        let mut summary = ExtractionSummary::default();

        for image in images.iter_mut() {
            let Some(path) = image.local_path().map(|p| p.to_path_buf()) else {
                debug!(url = image.source_url(), "Skipping recognition for image without a local path");
                RECOGNITIONS_TOTAL.with_label_values(&["skipped"]).inc();
                summary.skipped += 1;
                continue;
            };

            match self.recognizer.recognize(&path, language).await {
                Ok(raw) => {
                    let text = normalize_text(&raw);
                    summary.total_words += text.split_whitespace().count();
                    summary.processed += 1;
                    RECOGNITIONS_TOTAL.with_label_values(&["success"]).inc();
                    image.record_text(text);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to run text recognition");
                    summary.failed += 1;
                    RECOGNITIONS_TOTAL.with_label_values(&["failed"]).inc();
                    image.record_text(String::new());
                }
            }
        }

        summary
    }

    /// Runs [`Self::process`] over every post in order.
    pub async fn process_posts(&self, posts: &mut [CarouselPost], language: &str) -> ExtractionSummary {
        let mut summary = ExtractionSummary::default();
        for post in posts.iter_mut() {
            summary.merge(self.process(post.images_mut(), language).await);
        }

        info!(
            recognizer = self.recognizer.name(),
            processed = summary.processed,
            skipped = summary.skipped,
            failed = summary.failed,
            "Text recognition finished"
        );

        summary
    }
}
