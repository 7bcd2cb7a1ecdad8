//! Image processing: decode by extension, resize, encode to JPEG.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (JPEG, PNG)** | `image::ImageReader` with the format pinned by extension |
//! | **Decode (HEIF/HEIC)** | `libheif-rs` (feature `heif`) + YCbCr→RGB conversion |
//! | **Resize** | `DynamicImage::resize_exact` with `Lanczos3` |
//! | **Encode** | `image::codecs::jpeg::JpegEncoder`, quality 75 |
//!
//! The module is split into:
//! - **Format**: [`PhotoFormat`] and the supported-extension check
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod format;
mod heif;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::fit_to_width;
pub use format::{PhotoFormat, SUPPORTED_EXTENSIONS, is_supported_image};
pub use operations::{ThumbnailConfig, create_thumbnail, plan_thumbnail};
pub use params::{Quality, ThumbnailParams};
pub use rust_backend::{RustBackend, decode, encode_jpeg};
