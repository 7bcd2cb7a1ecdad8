//! Finding zip archives left inside a photo tree.

use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ZipScanError {
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Whether a file name ends in `.zip`, ignoring case.
pub fn is_zip_file(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".zip")
}

/// Walk `dir` and call `on_found` with the path of every zip file.
///
/// Directories are never reported, whatever their name. The first walk
/// error stops the scan; paths already reported stay reported.
pub fn find_zip_files(dir: &Path, mut on_found: impl FnMut(&Path)) -> Result<usize, ZipScanError> {
    let mut found = 0;
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_dir() && is_zip_file(&entry.file_name().to_string_lossy()) {
            on_found(entry.path());
            found += 1;
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::touch;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn scan(dir: &Path) -> Result<Vec<PathBuf>, ZipScanError> {
        let mut paths = Vec::new();
        find_zip_files(dir, |p| paths.push(p.to_path_buf()))?;
        Ok(paths)
    }

    #[test]
    fn zip_suffix_is_case_insensitive() {
        assert!(is_zip_file("takeout.zip"));
        assert!(is_zip_file("TAKEOUT.ZIP"));
        assert!(!is_zip_file("takeout.zip.part"));
        assert!(!is_zip_file("zip"));
    }

    #[test]
    fn finds_nested_zips_only() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.zip"));
        touch(&tmp.path().join("album/B.ZIP"));
        touch(&tmp.path().join("album/deep/c.zip"));
        touch(&tmp.path().join("album/photo.jpg"));
        touch(&tmp.path().join("notes.txt"));

        let paths = scan(tmp.path()).unwrap();

        assert_eq!(
            paths,
            vec![
                tmp.path().join("a.zip"),
                tmp.path().join("album/B.ZIP"),
                tmp.path().join("album/deep/c.zip"),
            ]
        );
    }

    #[test]
    fn directory_named_zip_is_not_reported() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("export.zip/inner.txt"));

        assert!(scan(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn returns_count() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("one.zip"));
        touch(&tmp.path().join("two.zip"));

        assert_eq!(find_zip_files(tmp.path(), |_| {}).unwrap(), 2);
    }

    #[test]
    fn missing_directory_is_walk_error() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            scan(&tmp.path().join("absent")),
            Err(ZipScanError::Walk(_))
        ));
    }
}
