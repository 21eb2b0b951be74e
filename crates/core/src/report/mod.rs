//! Report module: renders annotated posts into a Markdown document.
//!
//! The report lists every post in input order and every image in index
//! order, whatever happened to it during download or recognition, followed by
//! aggregate statistics. It is written in one piece and replaces any earlier
//! report for the same profile.
//!
//! # Example
//!
//! ```ignore
//! use carousel_core::report::{ReportAssembler, ReportConfig};
//!
//! let assembler = ReportAssembler::new(ReportConfig::default());
//! let path = assembler.assemble("alice", &posts, Path::new("exports")).await?;
//! // exports/tiktok_alice_carousels.md
//! ```

mod config;
mod error;
mod markdown;
mod summary;

pub use config::ReportConfig;
pub use error::ReportError;
pub use markdown::{
    sanitize_caption, ReportAssembler, DOWNLOAD_FAILED_PLACEHOLDER, NO_CAPTION_PLACEHOLDER,
    NO_TEXT_PLACEHOLDER,
};
pub use summary::ReportSummary;
