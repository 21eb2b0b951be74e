//! Testing utilities and mock collaborators.
//!
//! Provides in-memory implementations of the [`PostSource`](crate::source::PostSource)
//! and [`Recognizer`](crate::recognizer::Recognizer) traits so the pipeline
//! can be exercised without a content platform or an OCR engine.
//!
//! # Example
//!
//! ```rust,ignore
//! use carousel_core::testing::{MockRecognizer, MockSource};
//! use carousel_core::CarouselPost;
//!
//! let source = MockSource::new();
//! source.set_posts(vec![CarouselPost::new("p1", "caption", ["https://cdn/1.jpg"])]).await;
//!
//! let recognizer = MockRecognizer::new();
//! recognizer.set_default_text("hello world").await;
//! ```

mod mock_recognizer;
mod mock_source;

pub use mock_recognizer::MockRecognizer;
pub use mock_source::{MockSource, RecordedRequest};

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::PathBuf;

    use crate::model::{CarouselImage, CarouselPost};

    /// Create an image in a given state.
    ///
    /// `local_path` marks it downloaded, `text` marks it processed.
    pub fn image(index: u32, local_path: Option<&str>, text: Option<&str>) -> CarouselImage {
        let mut image = CarouselImage::new(
            index,
            format!("https://cdn.example.com/img/{}.jpg", index),
        );
        if let Some(path) = local_path {
            image.record_download(PathBuf::from(path));
        }
        if let Some(text) = text {
            image.record_text(text.to_string());
        }
        image
    }

    /// Create a post from prepared images.
    pub fn post_with_images(id: &str, caption: &str, images: Vec<CarouselImage>) -> CarouselPost {
        CarouselPost::from_images(id, caption, images)
    }

    /// Create an unprocessed post whose image URLs live under `base_url`.
    pub fn post(id: &str, caption: &str, base_url: &str, images: u32) -> CarouselPost {
        CarouselPost::new(
            id,
            caption,
            (1..=images).map(|i| format!("{}/{}/{}.jpg", base_url, id, i)),
        )
    }
}
