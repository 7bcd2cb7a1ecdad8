//! Runtime configuration.
//!
//! There is no config file: everything comes from command-line flags, which
//! `main.rs` turns into the plain structs below. The fixed naming and sizing
//! rules of the thumbnail tree also live here.
//!
//! ```text
//! photos/                      thumbs/
//! ├── vacation/                ├── vacation/
//! │   ├── beach.jpg     →      │   ├── beach.jpg_th.jpg
//! │   └── IMG_0001.HEIC →      │   └── IMG_0001.HEIC_th.jpg
//! └── loose.png         →      └── loose.png_th.jpg
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Width of every generated thumbnail, in pixels.
pub const THUMB_WIDTH: u32 = 200;

/// Appended to the full relative photo path (extension included).
pub const THUMB_SUFFIX: &str = "_th.jpg";

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// The two directory trees every command works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    /// Originals; never written to.
    pub photos: PathBuf,
    /// Mirror of `photos` holding the thumbnails.
    pub thumbs: PathBuf,
}

impl Roots {
    pub fn new(photos: impl Into<PathBuf>, thumbs: impl Into<PathBuf>) -> Self {
        Self {
            photos: photos.into(),
            thumbs: thumbs.into(),
        }
    }

    /// Where the thumbnail of `relative` (a path under `photos`) lives.
    ///
    /// The suffix is appended, not substituted: `album/pic.jpg` maps to
    /// `album/pic.jpg_th.jpg`.
    pub fn thumbnail_path(&self, relative: &Path) -> PathBuf {
        let mut name = relative.as_os_str().to_owned();
        name.push(THUMB_SUFFIX);
        self.thumbs.join(name)
    }
}

/// Gallery server settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// Ensure `path` exists and is a directory.
pub fn check_dir(path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        Err(ConfigError::NotFound(path.to_path_buf()))
    } else if !path.is_dir() {
        Err(ConfigError::NotADirectory(path.to_path_buf()))
    } else {
        Ok(())
    }
}

/// `clap` value parser for flags that must name an existing directory.
pub fn existing_dir(value: &str) -> Result<PathBuf, ConfigError> {
    let path = PathBuf::from(value);
    check_dir(&path)?;
    Ok(path)
}
