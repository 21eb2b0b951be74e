use serde::Serialize;
use std::path::{Path, PathBuf};

/// A single image inside a carousel post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselImage {
    index: u32,
    source_url: String,
    local_path: Option<PathBuf>,
    extracted_text: Option<String>,
}

impl CarouselImage {
    /// Creates an image skeleton. `index` is the 1-based carousel position.
    pub fn new(index: u32, source_url: impl Into<String>) -> Self {
        Self {
            index,
            source_url: source_url.into(),
            local_path: None,
            extracted_text: None,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Where the image was stored, if the download succeeded.
    pub fn local_path(&self) -> Option<&Path> {
        self.local_path.as_deref()
    }

    /// Recognized text.
    ///
    /// `None` means the image was never handed to the recognizer (usually
    /// because the download failed). `Some("")` means recognition ran and
    /// produced nothing, or failed.
    pub fn extracted_text(&self) -> Option<&str> {
        self.extracted_text.as_deref()
    }

    pub fn is_downloaded(&self) -> bool {
        self.local_path.is_some()
    }

    /// Number of whitespace-delimited words in the extracted text.
    pub fn word_count(&self) -> usize {
        self.extracted_text
            .as_deref()
            .map(|text| text.split_whitespace().count())
            .unwrap_or(0)
    }

    pub(crate) fn record_download(&mut self, path: PathBuf) {
        debug_assert!(
            self.local_path.is_none(),
            "local path recorded twice for image {}",
            self.index
        );
        if self.local_path.is_none() {
            self.local_path = Some(path);
        }
    }

    pub(crate) fn record_text(&mut self, text: String) {
        debug_assert!(
            self.extracted_text.is_none(),
            "text recorded twice for image {}",
            self.index
        );
        if self.extracted_text.is_none() {
            self.extracted_text = Some(text);
        }
    }
}

/// A carousel post: a caption plus an ordered set of images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselPost {
    id: String,
    caption: String,
    images: Vec<CarouselImage>,
}

impl CarouselPost {
    /// Builds a post from its image URLs in display order.
    ///
    /// Images are numbered 1..=N in the order given.
    pub fn new<I, S>(id: impl Into<String>, caption: impl Into<String>, image_urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images = image_urls
            .into_iter()
            .zip(1u32..)
            .map(|(url, index)| CarouselImage::new(index, url))
            .collect();

        Self {
            id: id.into(),
            caption: caption.into(),
            images,
        }
    }

    /// Builds a post from already numbered images.
    pub(crate) fn from_images(
        id: impl Into<String>,
        caption: impl Into<String>,
        images: Vec<CarouselImage>,
    ) -> Self {
        Self {
            id: id.into(),
            caption: caption.into(),
            images,
        }
    }

    /// Identifier used when the source did not provide one.
    pub fn fallback_id(username: &str, position: usize) -> String {
        format!("{}_{}", username, position)
    }

    /// Replaces a blank id with [`Self::fallback_id`].
    pub(crate) fn ensure_id(&mut self, username: &str, position: usize) {
        if self.id.trim().is_empty() {
            self.id = Self::fallback_id(username, position);
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn images(&self) -> &[CarouselImage] {
        &self.images
    }

    pub(crate) fn images_mut(&mut self) -> &mut [CarouselImage] {
        &mut self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn total_word_count(&self) -> usize {
        self.images.iter().map(CarouselImage::word_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_numbers_images_densely() {
        let post = CarouselPost::new("p1", "caption", ["a", "b", "c"]);
        let indices: Vec<u32> = post.images().iter().map(|i| i.index()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(post.images()[1].source_url(), "b");
        assert_eq!(post.image_count(), 3);
    }

    #[test]
    fn test_word_count_absent_and_empty_text() {
        let mut image = CarouselImage::new(1, "https://cdn.example.com/1.jpg");
        assert_eq!(image.word_count(), 0);

        image.record_text(String::new());
        assert_eq!(image.extracted_text(), Some(""));
        assert_eq!(image.word_count(), 0);
    }

    #[test]
    fn test_word_count_counts_tokens_across_lines() {
        let mut image = CarouselImage::new(1, "u");
        image.record_text("Hello world\nsecond  line here".to_string());
        assert_eq!(image.word_count(), 5);
    }

    #[test]
    fn test_total_word_count() {
        let mut post = CarouselPost::new("p", "", ["a", "b"]);
        post.images_mut()[0].record_text("one two".to_string());
        post.images_mut()[1].record_text("three".to_string());
        assert_eq!(post.total_word_count(), 3);
    }

    #[test]
    fn test_record_download_sets_path() {
        let mut image = CarouselImage::new(2, "u");
        assert!(!image.is_downloaded());
        image.record_download(PathBuf::from("data/alice/carousel_1/image_2.jpg"));
        assert!(image.is_downloaded());
        assert_eq!(
            image.local_path(),
            Some(Path::new("data/alice/carousel_1/image_2.jpg"))
        );
    }

    #[test]
    fn test_fallback_id() {
        assert_eq!(CarouselPost::fallback_id("alice", 3), "alice_3");
    }

    #[test]
    fn test_ensure_id_only_replaces_blank_ids() {
        let mut blank = CarouselPost::new("  ", "", ["a"]);
        blank.ensure_id("alice", 2);
        assert_eq!(blank.id(), "alice_2");

        let mut kept = CarouselPost::new("7301", "", ["a"]);
        kept.ensure_id("alice", 1);
        assert_eq!(kept.id(), "7301");
    }
}
