//! Recognizer module for extracting text from images.
//!
//! This module provides the `Recognizer` trait, the boundary to whatever OCR
//! engine is installed, and a Tesseract implementation that drives the
//! `tesseract` command line tool.
//!
//! # Example
//!
//! ```ignore
//! use carousel_core::recognizer::{Recognizer, RecognizerConfig, TesseractRecognizer};
//!
//! let recognizer = TesseractRecognizer::new(RecognizerConfig::default());
//! recognizer.validate().await?;
//!
//! let text = recognizer.recognize(Path::new("data/alice/carousel_1/image_1.jpg"), "eng").await?;
//! ```

mod config;
mod error;
mod tesseract;
mod traits;

pub use config::RecognizerConfig;
pub use error::RecognitionError;
pub use tesseract::TesseractRecognizer;
pub use traits::Recognizer;
