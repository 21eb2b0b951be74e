use serde::Serialize;

use crate::model::CarouselPost;

/// Aggregate statistics printed at the end of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_posts: usize,
    /// Every image of every post, downloaded or not.
    pub total_images: usize,
    pub total_words: usize,
    /// `total_words / total_images` rounded to the nearest integer, halves up.
    /// Zero when there are no images.
    pub average_words_per_image: usize,
}

impl ReportSummary {
    pub fn from_posts(posts: &[CarouselPost]) -> Self {
        let total_images: usize = posts.iter().map(CarouselPost::image_count).sum();
        let total_words: usize = posts.iter().map(CarouselPost::total_word_count).sum();

        let average_words_per_image = if total_images == 0 {
            0
        } else {
            (2 * total_words + total_images) / (2 * total_images)
        };

        Self {
            total_posts: posts.len(),
            total_images,
            total_words,
            average_words_per_image,
        }
    }
}
