//! Thumbnail generation over a photo tree.
//!
//! Walks the photos root depth-first, siblings in file-name order, and gives
//! every supported photo a 200px-wide JPEG at the mirrored path under the
//! thumbs root (see [`Roots::thumbnail_path`]).
//!
//! ## Skip rule
//!
//! Anything already present at the thumbnail path counts as done. There is
//! no content or timestamp comparison, so a second run over the same tree
//! writes nothing.
//!
//! ## Failure
//!
//! The walk is strictly sequential and stops at the first error. Thumbnails
//! already written stay; photos later in walk order are left untouched. A
//! failure halfway through writing may leave a partial file, which the next
//! run will then skip.
//!
//! ## Progress
//!
//! Each created or skipped photo produces a [`ThumbEvent`] on the optional
//! channel; `main.rs` prints them via [`output::format_thumb_event`](crate::output::format_thumb_event).

use crate::config::Roots;
use crate::imaging::{
    BackendError, ImageBackend, RustBackend, ThumbnailConfig, create_thumbnail,
    is_supported_image,
};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ThumbError {
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("error constructing relative path for {}", .0.display())]
    RelativePath(PathBuf),
    #[error("error processing image {}: {source}", path.display())]
    Process {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
}

/// Progress notification for a single photo.
#[derive(Debug, Clone, PartialEq)]
pub enum ThumbEvent {
    /// A new thumbnail was written.
    Created {
        source: PathBuf,
        output: PathBuf,
        width: u32,
        height: u32,
    },
    /// A file already existed at `output`.
    Skipped { output: PathBuf },
}

/// Counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThumbSummary {
    pub created: usize,
    pub skipped: usize,
}

/// Generate missing thumbnails with the default backend and settings.
pub fn create_thumbs(
    roots: &Roots,
    events: Option<Sender<ThumbEvent>>,
) -> Result<ThumbSummary, ThumbError> {
    create_thumbs_with_backend(&RustBackend::new(), roots, &ThumbnailConfig::default(), events)
}

/// Generate missing thumbnails using a specific backend (allows testing with mock).
pub fn create_thumbs_with_backend(
    backend: &impl ImageBackend,
    roots: &Roots,
    config: &ThumbnailConfig,
    events: Option<Sender<ThumbEvent>>,
) -> Result<ThumbSummary, ThumbError> {
    let mut summary = ThumbSummary::default();
    let emit = |event: ThumbEvent| {
        if let Some(tx) = &events {
            // A dropped receiver only loses progress output.
            tx.send(event).ok();
        }
    };

    for entry in WalkDir::new(&roots.photos).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if !is_supported_image(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let source = entry.path();
        let relative = source
            .strip_prefix(&roots.photos)
            .map_err(|_| ThumbError::RelativePath(source.to_path_buf()))?;
        let output = roots.thumbnail_path(relative);

        if thumbnail_exists(&output) {
            debug!(output = %output.display(), "thumbnail exists, skipping");
            summary.skipped += 1;
            emit(ThumbEvent::Skipped { output });
            continue;
        }

        let dims = create_thumbnail(backend, source, &output, config).map_err(|e| {
            ThumbError::Process {
                path: source.to_path_buf(),
                source: e,
            }
        })?;
        info!("{} -> {}", source.display(), output.display());
        summary.created += 1;
        emit(ThumbEvent::Created {
            source: source.to_path_buf(),
            output,
            width: dims.width,
            height: dims.height,
        });
    }

    Ok(summary)
}

/// Anything at `path` counts, even if it cannot be inspected.
fn thumbnail_exists(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != ErrorKind::NotFound,
    }
}
