//! Shared test utilities: tiny photo fixtures and tree inspection.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_jpeg(&tmp.path().join("photos/vacation/beach.jpg"), 800, 600);
//! touch(&tmp.path().join("photos/vacation/notes.txt"));
//!
//! assert_eq!(relative_files(&tmp.path().join("photos")), vec![
//!     "vacation/beach.jpg",
//!     "vacation/notes.txt",
//! ]);
//! ```

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;
use walkdir::WalkDir;

// =========================================================================
// Fixture writers: create parent directories as needed
// =========================================================================

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
}

/// Write a `width`×`height` gradient JPEG.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    ensure_parent(path);
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save_with_format(path, ImageFormat::Jpeg).unwrap();
}

/// Write a `width`×`height` PNG with an alpha channel.
pub fn write_png(path: &Path, width: u32, height: u32) {
    ensure_parent(path);
    let img = RgbaImage::from_fn(width, height, |x, _| Rgba([200, (x % 256) as u8, 40, 180]));
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

/// Write a flat `rgb`-coloured `width`×`height` HEIC through libheif's encoder.
///
/// HEVC is preferred; builds of libheif without an HEVC encoder fall back
/// to AV1, which the decoder reads just the same.
#[cfg(feature = "heif")]
pub fn write_heic(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    use libheif_rs::{
        Channel, ColorSpace, CompressionFormat, EncoderQuality, HeifContext, Image, LibHeif,
        RgbChroma,
    };

    ensure_parent(path);
    let mut img = Image::new(width, height, ColorSpace::Rgb(RgbChroma::Rgb)).unwrap();
    img.create_plane(Channel::Interleaved, width, height, 8).unwrap();
    {
        let plane = img.planes_mut().interleaved.unwrap();
        for row in 0..height as usize {
            for col in 0..width as usize {
                let at = row * plane.stride + col * 3;
                plane.data[at..at + 3].copy_from_slice(&rgb);
            }
        }
    }

    let lib_heif = LibHeif::new();
    let mut encoder = lib_heif
        .encoder_for_format(CompressionFormat::Hevc)
        .or_else(|_| lib_heif.encoder_for_format(CompressionFormat::Av1))
        .unwrap();
    encoder.set_quality(EncoderQuality::Lossy(90)).unwrap();

    let mut ctx = HeifContext::new().unwrap();
    ctx.encode_image(&img, &mut encoder, None).unwrap();
    std::fs::write(path, ctx.write_to_bytes().unwrap()).unwrap();
}

/// Create an empty file.
pub fn touch(path: &Path) {
    ensure_parent(path);
    std::fs::write(path, b"").unwrap();
}

// =========================================================================
// Tree inspection
// =========================================================================

/// All regular files under `root`, as sorted `/`-separated relative paths.
pub fn relative_files(root: &Path) -> Vec<String> {
    if !root.exists() {
        return Vec::new();
    }
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}
