//! Pipeline module: one acquisition run from profile reference to report.
//!
//! A run resolves the username, asks the [`PostSource`](crate::source::PostSource)
//! for posts, then runs three phases strictly one after another:
//!
//! 1. download every image (bounded concurrency),
//! 2. extract text from every downloaded image,
//! 3. write the Markdown report.
//!
//! Each phase sees the complete output of the previous one. Per-image
//! failures stay inside their phase; resolution, source, directory and
//! report-write failures end the run.

mod error;
mod runner;
mod username;

pub use error::PipelineError;
pub use runner::{CarouselPipeline, PipelineResult};
pub use username::resolve_username;
