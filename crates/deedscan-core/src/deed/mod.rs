//! Deed text extraction: segmentation, field rules, normalization, assembly.

pub mod assembler;
mod extractor;
mod normalizer;
mod pipeline;
pub mod rules;
mod segmenter;

pub use extractor::DeedExtractor;
pub use normalizer::{NormalizedValues, Normalizer};
pub use pipeline::{Pipeline, PipelineOutput};
pub use segmenter::{Blocks, Segmenter};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
