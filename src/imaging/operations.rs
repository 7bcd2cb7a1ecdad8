//! High-level image operations.
//!
//! These functions combine configuration with backend execution. They decide
//! the parameters and leave the pixel work to the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{Quality, ThumbnailParams};
use crate::config::THUMB_WIDTH;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Configuration for thumbnail generation.
#[derive(Debug, Clone)]
pub struct ThumbnailConfig {
    pub width: u32,
    pub quality: Quality,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: THUMB_WIDTH,
            quality: Quality::default(),
        }
    }
}

/// Plan a thumbnail operation without executing it.
pub fn plan_thumbnail(source: &Path, output: &Path, config: &ThumbnailConfig) -> ThumbnailParams {
    ThumbnailParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        width: config.width,
        quality: config.quality,
    }
}

/// Create a thumbnail of `source` at `output`.
pub fn create_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    config: &ThumbnailConfig,
) -> Result<Dimensions> {
    backend.thumbnail(&plan_thumbnail(source, output, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;

    #[test]
    fn default_config_is_200_wide() {
        let config = ThumbnailConfig::default();
        assert_eq!(config.width, 200);
        assert_eq!(config.quality, Quality::new(75));
    }

    #[test]
    fn plan_copies_paths_and_config() {
        let config = ThumbnailConfig {
            width: 120,
            quality: Quality::new(90),
        };
        let params = plan_thumbnail(Path::new("/p/a.png"), Path::new("/t/a.png_th.jpg"), &config);

        assert_eq!(params.source, Path::new("/p/a.png"));
        assert_eq!(params.output, Path::new("/t/a.png_th.jpg"));
        assert_eq!(params.width, 120);
        assert_eq!(params.quality.value(), 90);
    }

    #[test]
    fn create_thumbnail_uses_backend() {
        let backend = MockBackend::new();

        create_thumbnail(
            &backend,
            Path::new("/p/a.jpg"),
            Path::new("/t/a.jpg_th.jpg"),
            &ThumbnailConfig::default(),
        )
        .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].source, "/p/a.jpg");
        assert_eq!(ops[0].width, 200);
    }
}
