//! Photo formats recognised by the tool.
//!
//! Selection is purely by file-name suffix, case-insensitive. A file called
//! `IMG_0001.HEIC` is a HEIF photo even if its bytes say otherwise; the
//! decoder reports the mismatch.

use std::path::Path;

/// Extensions treated as photos, lower-case and without the dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["heif", "heic", "jpg", "jpeg", "png"];

/// Codec family chosen for a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFormat {
    Jpeg,
    Png,
    Heif,
}

impl PhotoFormat {
    /// Map a bare extension (no dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "heif" | "heic" => Some(Self::Heif),
            _ => None,
        }
    }

    /// Format of a file name, taken from the text after its last dot.
    ///
    /// Dot-files such as `.jpg` count: the whole name is the suffix.
    pub fn from_file_name(name: &str) -> Option<Self> {
        name.rsplit_once('.')
            .and_then(|(_, ext)| Self::from_extension(ext))
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(Self::from_file_name)
    }
}

/// Whether a file name carries one of the [`SUPPORTED_EXTENSIONS`].
pub fn is_supported_image(name: &str) -> bool {
    PhotoFormat::from_file_name(name).is_some()
}
