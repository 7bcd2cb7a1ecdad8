//! HTTP gallery over the photos and thumbs trees.
//!
//! ## Routes
//!
//! | Route | Response |
//! |---|---|
//! | `GET /` | Album index: first-level subdirectories of the photos root |
//! | `GET /gallery/{album}` | Thumbnail grid linking each thumbnail to its photo |
//! | `GET /photos/{path}` | Static file from the photos root |
//! | `GET /thumbnails/{path}` | Static file from the thumbs root |
//!
//! Every request reads the filesystem afresh; nothing is cached between
//! requests. Listing errors become 404/500 responses and never stop the
//! server; only failing to bind is fatal.

mod albums;
mod server;
mod templates;

pub use albums::{Album, GalleryEntry, album_entries, list_albums, sanitize_album};
pub use server::{ServerError, router, run, serve};
pub use templates::Templates;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Per-request failures, each mapped to a status code.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Not Found")]
    NotFound,
    #[error("Unable to read directories")]
    ReadAlbums(#[source] std::io::Error),
    #[error("Unable to read photos")]
    ReadPhotos(#[source] std::io::Error),
}

impl GalleryError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ReadAlbums(_) | Self::ReadPhotos(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GalleryError {
    fn into_response(self) -> Response {
        match &self {
            Self::ReadAlbums(e) | Self::ReadPhotos(e) => error!(error = %e, "{self}"),
            Self::NotFound => {}
        }
        (self.status(), self.to_string()).into_response()
    }
}
