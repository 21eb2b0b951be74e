//! Records that flow through the pipeline.
//!
//! Posts and images are built once as skeletons (URL + index + caption) and
//! then annotated in place: the fetcher records where each image was stored,
//! the extractor records the recognized text. The report stage only reads them.

mod types;

pub use types::{CarouselImage, CarouselPost};
