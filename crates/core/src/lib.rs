pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod recognizer;
pub mod report;
pub mod source;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, load_config_with_overrides, validate_config, Config,
    ConfigError,
};
pub use extractor::{normalize_text, ExtractionSummary, TextExtractor};
pub use fetcher::{FetchError, FetchSummary, FetcherConfig, ImageFetcher};
pub use model::{CarouselImage, CarouselPost};
pub use pipeline::{resolve_username, CarouselPipeline, PipelineError, PipelineResult};
pub use recognizer::{RecognitionError, Recognizer, RecognizerConfig, TesseractRecognizer};
pub use report::{ReportAssembler, ReportConfig, ReportError, ReportSummary};
pub use source::{ManifestSource, PostSource, SourceError};
