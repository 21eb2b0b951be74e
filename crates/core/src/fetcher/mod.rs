//! Fetcher module for downloading carousel images.
//!
//! Every image of every post is fetched concurrently, but never more than
//! `concurrency` requests are in flight for the whole run: all requests share
//! one [`ConcurrencyLimiter`]. Individual failures are logged and leave the
//! image without a local path; they never abort sibling downloads.
//!
//! # Layout
//!
//! ```text
//! <destination_root>/<username>/carousel_<n>/image_<index><ext>
//! ```
//!
//! `n` is the 1-based position of the post in the input, so re-running over
//! the same input overwrites files instead of accumulating new ones.
//!
//! # Example
//!
//! ```ignore
//! use carousel_core::fetcher::{FetcherConfig, ImageFetcher};
//!
//! let fetcher = ImageFetcher::new(FetcherConfig::default())?;
//! let summary = fetcher.fetch(&mut posts, Path::new("data"), "alice").await?;
//! println!("{} of {} images downloaded", summary.downloaded, summary.attempted);
//! ```

mod config;
mod error;
mod extension;
mod http;
mod limiter;

pub use config::FetcherConfig;
pub use error::FetchError;
pub use extension::{extension_for_content_type, resolve_extension, DEFAULT_EXTENSION};
pub use http::{carousel_dir, image_file_name, FetchSummary, ImageFetcher};
pub use limiter::{ConcurrencyLimiter, LimiterPermit};
