//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG) | `image::ImageReader::with_format`, format pinned by extension |
//! | Decode (HEIF/HEIC) | [`heif::decode_heif`](super::heif) |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` on an RGB8 copy |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::fit_to_width;
use super::format::PhotoFormat;
use super::heif::decode_heif;
use super::params::{Quality, ThumbnailParams};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a photo into memory, picking the codec from its extension.
pub fn decode(path: &Path) -> Result<DynamicImage, BackendError> {
    match PhotoFormat::from_path(path) {
        Some(PhotoFormat::Jpeg) => decode_with(path, ImageFormat::Jpeg),
        Some(PhotoFormat::Png) => decode_with(path, ImageFormat::Png),
        Some(PhotoFormat::Heif) => decode_heif(path),
        None => Err(BackendError::Unsupported(path.to_path_buf())),
    }
}

fn decode_with(path: &Path, format: ImageFormat) -> Result<DynamicImage, BackendError> {
    let file = File::open(path)?;
    ImageReader::with_format(BufReader::new(file), format)
        .decode()
        .map_err(|e| BackendError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Encode as baseline JPEG. Alpha is dropped.
pub fn encode_jpeg(img: &DynamicImage, quality: Quality) -> Result<Vec<u8>, image::ImageError> {
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, quality.value() as u8);
    rgb.write_with_encoder(encoder)?;
    Ok(bytes)
}

impl ImageBackend for RustBackend {
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<Dimensions, BackendError> {
        let img = decode(&params.source)?;
        let (width, height) = fit_to_width((img.width(), img.height()), params.width);
        let resized = img.resize_exact(width, height, FilterType::Lanczos3);

        let bytes = encode_jpeg(&resized, params.quality).map_err(|e| BackendError::Encode {
            path: params.output.clone(),
            message: e.to_string(),
        })?;

        if let Some(parent) = params.output.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&params.output, bytes)?;

        Ok(Dimensions { width, height })
    }
}
