//! # photo-tool
//!
//! Small utilities for a directory tree of photos: generate JPEG thumbnails
//! next to it, browse both through a minimal HTTP gallery, and find stray zip
//! archives.
//!
//! # Commands
//!
//! ```text
//! create-thumbs   photos/ → thumbs/          (mirror tree of 200px JPEGs)
//! serve-gallery   photos/ + thumbs/ → :8080  (album index + album pages)
//! show-zip-files  photos/ → stdout           (every *.zip path)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`thumbs`] | Walks the photos tree and creates missing thumbnails, one file at a time |
//! | [`imaging`] | Decode by extension (JPEG, PNG, HEIF), Lanczos3 resize, JPEG encode |
//! | [`gallery`] | axum router: two maud-rendered views plus static file mounts |
//! | [`zips`] | Recursive search for `.zip` files |
//! | [`config`] | Directory roots, server settings, thumbnail naming rules |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Existence Is the Cache
//!
//! A thumbnail lives at `<thumbs>/<relative photo path>_th.jpg`. If anything
//! is already at that path the photo is skipped: there is no manifest, hash
//! or timestamp check. Re-running `create-thumbs` after adding photos only
//! touches the new ones; deleting a thumbnail forces it to be regenerated.
//!
//! ## Sequential Walk, Stop on First Error
//!
//! Photos are processed strictly one after another in file-name order. The
//! first unreadable or undecodable file ends the run with an error that names
//! it, and the command exits non-zero. Thumbnails written before the failure
//! stay in place, so fixing or removing the file and re-running continues
//! from where it stopped.
//!
//! ## HEIF Through libheif
//!
//! JPEG and PNG use the pure-Rust decoders of the `image` crate. HEIC needs
//! libheif, a C library, linked through the `heif` feature, which is on by
//! default. A `--no-default-features` build drops it; HEIF photos then fail
//! with a decode error naming the missing feature.

pub mod config;
pub mod gallery;
pub mod imaging;
pub mod output;
pub mod thumbs;
pub mod zips;

#[cfg(test)]
pub(crate) mod test_helpers;
