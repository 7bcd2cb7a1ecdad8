use super::albums::{album_entries, list_albums, sanitize_album};
use super::templates::Templates;
use super::GalleryError;
use crate::config::{ConfigError, Roots, ServerConfig, check_dir};
use axum::Router;
use axum::extract::{Path as UrlPath, State};
use axum::response::Html;
use axum::routing::get;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tower_http::services::ServeDir;
use tracing::info;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("invalid gallery root: {0}")]
    Root(#[from] ConfigError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("cannot listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone)]
struct AppState {
    photos: Arc<PathBuf>,
    templates: Arc<Templates>,
}

/// Build the gallery router over `roots`.
pub fn router(roots: &Roots, templates: Templates) -> Router {
    let state = AppState {
        photos: Arc::new(roots.photos.clone()),
        templates: Arc::new(templates),
    };

    Router::new()
        .route("/", get(index))
        .route("/gallery/{*album}", get(album))
        .nest_service("/photos", ServeDir::new(&roots.photos))
        .nest_service("/thumbnails", ServeDir::new(&roots.thumbs))
        .fallback(not_found)
        .with_state(state)
}

/// Run a directory listing on the blocking pool, off the async workers.
async fn listing<T, F>(read: F) -> io::Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> io::Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(read)
        .await
        .map_err(io::Error::other)?
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, GalleryError> {
    let photos = Arc::clone(&state.photos);
    let albums = listing(move || list_albums(&photos))
        .await
        .map_err(GalleryError::ReadAlbums)?;
    Ok(Html(state.templates.render_index(&albums).into_string()))
}

async fn album(
    State(state): State<AppState>,
    UrlPath(raw): UrlPath<String>,
) -> Result<Html<String>, GalleryError> {
    let album = sanitize_album(&raw).ok_or(GalleryError::NotFound)?.to_owned();
    let photos = Arc::clone(&state.photos);
    let name = album.clone();
    let entries = listing(move || album_entries(&photos, &name))
        .await
        .map_err(GalleryError::ReadPhotos)?;
    Ok(Html(state.templates.render_album(&album, &entries).into_string()))
}

async fn not_found() -> GalleryError {
    GalleryError::NotFound
}

/// Bind and serve until the process is stopped.
pub async fn serve(
    roots: &Roots,
    config: &ServerConfig,
    templates: Templates,
) -> Result<(), ServerError> {
    check_dir(&roots.photos)?;
    check_dir(&roots.thumbs)?;

    let app = router(roots, templates);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(%addr, photos = %roots.photos.display(), thumbs = %roots.thumbs.display(), "gallery listening");
    println!("Starting server on {addr}...");

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Blocking entry point: start a multi-threaded runtime and [`serve`].
pub fn run(roots: &Roots, config: &ServerConfig, templates: Templates) -> Result<(), ServerError> {
    let runtime = tokio::runtime::Runtime::new().map_err(ServerError::Runtime)?;
    runtime.block_on(serve(roots, config, templates))
}
