//! Directory listings behind the two HTML views.

use crate::config::THUMB_SUFFIX;
use crate::imaging::is_supported_image;
use std::fs;
use std::io;
use std::path::Path;

/// A first-level subdirectory of the photos root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub name: String,
}

impl Album {
    /// Link to the album page.
    pub fn href(&self) -> String {
        format!("/gallery/{}", encode_segments(&self.name))
    }
}

/// One photo in an album: where its thumbnail and original are served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub thumb_url: String,
    pub photo_url: String,
}

/// Percent-encode each `/`-separated segment so `#`, `?` and `%` in names
/// stay part of the path.
fn encode_segments(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Directory entry names in `dir`, sorted, keeping those whose type passes `keep`.
fn sorted_names(dir: &Path, keep: impl Fn(&fs::FileType) -> bool) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if keep(&entry.file_type()?) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Albums directly under `photos_root`. Files and deeper directories are ignored.
pub fn list_albums(photos_root: &Path) -> io::Result<Vec<Album>> {
    Ok(sorted_names(photos_root, |t| t.is_dir())?
        .into_iter()
        .map(|name| Album { name })
        .collect())
}

/// Normalise an album taken from a URL.
///
/// Surrounding slashes are dropped. Returns `None` for an empty album or one
/// with `.` or `..` components, which could escape the photos root.
pub fn sanitize_album(raw: &str) -> Option<&str> {
    let album = raw.trim_matches('/');
    if album.is_empty() || album.split('/').any(|part| part == ".." || part == ".") {
        return None;
    }
    Some(album)
}

/// Thumbnail/photo URL pairs for the supported images directly inside `album`.
pub fn album_entries(photos_root: &Path, album: &str) -> io::Result<Vec<GalleryEntry>> {
    let names = sorted_names(&photos_root.join(album), |t| !t.is_dir())?;
    let album = encode_segments(album);
    Ok(names
        .into_iter()
        .filter(|name| is_supported_image(name))
        .map(|name| {
            let photo = format!("{album}/{}", urlencoding::encode(&name));
            GalleryEntry {
                thumb_url: format!("/thumbnails/{photo}{THUMB_SUFFIX}"),
                photo_url: format!("/photos/{photo}"),
            }
        })
        .collect())
}
