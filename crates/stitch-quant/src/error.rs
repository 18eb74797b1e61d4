//! Error types for pattern generation.

use thiserror::Error;

/// Errors from the quantization pipeline.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Invalid dimensions: {width}x{height} (width and height must be positive)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid color count: {count} (must be between 1 and 256)")]
    InvalidColorCount { count: usize },

    #[error("Image decode failure: {0}")]
    ImageDecode(#[from] image::ImageError),
}
