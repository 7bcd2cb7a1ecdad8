//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the seam between the tree walk in
//! [`thumbs`](crate::thumbs) and the pixel work. The production implementation
//! is [`RustBackend`](super::rust_backend::RustBackend); tests swap in a mock
//! that records operations without touching any codec.

use super::params::ThumbnailParams;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("error decoding {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
    #[error("error encoding thumbnail {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },
    #[error("no decoder for {}", .0.display())]
    Unsupported(PathBuf),
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decode `params.source`, resize it to `params.width` and write a JPEG
    /// to `params.output`, creating missing parent directories.
    ///
    /// Returns the dimensions of the written thumbnail.
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<Dimensions, BackendError>;
}
