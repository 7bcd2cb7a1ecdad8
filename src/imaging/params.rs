//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides where a thumbnail goes) and the [`backend`](super::backend)
//! (which does the actual pixel work). This separation allows swapping backends
//! (e.g. for testing with a mock) without changing the tree walk.
//!
//! ## Types
//!
//! - [`Quality`]: lossy encoding quality (1–100, default 75). Clamped on construction.
//! - [`ThumbnailParams`]: everything one thumbnail needs, from source and output paths to width and quality.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    /// The usual libjpeg default.
    fn default() -> Self {
        Self(75)
    }
}

/// Parameters for a thumbnail operation (decode, resize to width, encode JPEG).
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Target width; height follows the source aspect ratio.
    pub width: u32,
    pub quality: Quality,
}
