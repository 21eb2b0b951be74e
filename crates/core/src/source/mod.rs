//! Source module: where carousel posts come from.
//!
//! The pipeline only needs an ordered list of post skeletons (caption plus
//! ordered image URLs). Platform clients, scrapers and exported dumps all
//! hide behind the `PostSource` trait; anything platform specific is turned
//! into [`CarouselPost`](crate::model::CarouselPost) values here and never
//! leaks further.

mod error;
mod manifest;
mod traits;

pub use error::SourceError;
pub use manifest::ManifestSource;
pub use traits::PostSource;
