//! CLI output formatting.
//!
//! Each command has `format_*` functions (returning `Vec<String>` or `String`)
//! for testability and, where useful, a `print_*` wrapper that writes to
//! stdout. Format functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## create-thumbs
//!
//! ```text
//! Resized image saved to thumbs/vacation/beach.jpg_th.jpg (200x150)
//! Skipping thumbs/vacation/dunes.jpg_th.jpg, resized image already exists.
//!
//! Created 1 thumbnail, skipped 1
//! ```
//!
//! ## show-zip-files
//!
//! One path per line, nothing else, so the output can be piped.

use crate::thumbs::{ThumbEvent, ThumbSummary};
use std::path::Path;

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Lines for one generator event.
pub fn format_thumb_event(event: &ThumbEvent) -> Vec<String> {
    match event {
        ThumbEvent::Created {
            output,
            width,
            height,
            ..
        } => vec![format!(
            "Resized image saved to {} ({}x{})",
            output.display(),
            width,
            height
        )],
        ThumbEvent::Skipped { output } => vec![format!(
            "Skipping {}, resized image already exists.",
            output.display()
        )],
    }
}

pub fn format_thumb_summary(summary: &ThumbSummary) -> String {
    format!(
        "Created {}, skipped {}",
        plural(summary.created, "thumbnail"),
        summary.skipped
    )
}

pub fn print_thumb_summary(summary: &ThumbSummary) {
    println!();
    println!("{}", format_thumb_summary(summary));
}

pub fn format_zip_path(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn created_event_line() {
        let event = ThumbEvent::Created {
            source: PathBuf::from("photos/vacation/beach.jpg"),
            output: PathBuf::from("thumbs/vacation/beach.jpg_th.jpg"),
            width: 200,
            height: 150,
        };
        assert_eq!(
            format_thumb_event(&event),
            vec!["Resized image saved to thumbs/vacation/beach.jpg_th.jpg (200x150)"]
        );
    }

    #[test]
    fn skipped_event_line() {
        let event = ThumbEvent::Skipped {
            output: PathBuf::from("thumbs/a.jpg_th.jpg"),
        };
        assert_eq!(
            format_thumb_event(&event),
            vec!["Skipping thumbs/a.jpg_th.jpg, resized image already exists."]
        );
    }

    #[test]
    fn summary_pluralises() {
        assert_eq!(
            format_thumb_summary(&ThumbSummary { created: 1, skipped: 0 }),
            "Created 1 thumbnail, skipped 0"
        );
        assert_eq!(
            format_thumb_summary(&ThumbSummary { created: 3, skipped: 2 }),
            "Created 3 thumbnails, skipped 2"
        );
    }

    #[test]
    fn zip_path_is_verbatim() {
        assert_eq!(format_zip_path(Path::new("/data/x.ZIP")), "/data/x.ZIP");
    }
}
