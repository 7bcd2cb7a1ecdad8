//! HTML for the album index and album pages.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating:
//! a malformed template is a build error and all interpolation is escaped,
//! so rendering cannot fail at request time. The [`Templates`] handle is
//! built once at startup and shared through the router state.

use super::albums::{Album, GalleryEntry};
use maud::{DOCTYPE, Markup, html};

const CSS: &str = "\
body{font-family:system-ui,sans-serif;margin:2rem;background:#fafafa;color:#111}
a{color:#333}
ul.albums{list-style:none;padding:0}
ul.albums li{margin:.4rem 0;font-size:1.2rem}
.grid{display:flex;flex-wrap:wrap;gap:1rem}
.grid img{width:200px;height:auto;display:block}
";

/// Page renderer shared by every request.
#[derive(Debug, Clone)]
pub struct Templates {
    site_title: String,
}

impl Templates {
    pub fn new(site_title: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
        }
    }

    /// Renders the base HTML document structure
    fn base_document(&self, title: &str, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    style { (CSS) }
                }
                body {
                    (content)
                }
            }
        }
    }

    /// Album index: one link per album.
    pub fn render_index(&self, albums: &[Album]) -> Markup {
        let content = html! {
            h1 { (self.site_title) }
            @if albums.is_empty() {
                p { "No albums yet." }
            } @else {
                ul.albums {
                    @for album in albums {
                        li { a href=(album.href()) { (album.name) } }
                    }
                }
            }
        };
        self.base_document(&self.site_title, content)
    }

    /// Album page: each thumbnail links to its full-size photo.
    pub fn render_album(&self, album: &str, entries: &[GalleryEntry]) -> Markup {
        let content = html! {
            nav { a href="/" { "← " (self.site_title) } }
            h1 { (album) }
            div.grid {
                @for entry in entries {
                    a href=(entry.photo_url) {
                        img src=(entry.thumb_url) loading="lazy" alt="";
                    }
                }
            }
        };
        self.base_document(&format!("{album} · {}", self.site_title), content)
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new("Photos")
    }
}
