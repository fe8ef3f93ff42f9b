//! Palette file discovery.
//!
//! Commands that accept a directory walk it for `.palette` files so a
//! whole project's palettes can be reported or validated in one run.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{PalError, Result};

/// File extension for palette definition files.
pub const PALETTE_EXTENSION: &str = "palette";

/// Resolve a path argument to a list of palette files.
///
/// A file path is returned as-is; a directory is walked recursively for
/// `.palette` files, sorted for deterministic output. An empty directory
/// result is an error so a typo'd path fails loudly.
pub fn find_palette_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        return Err(PalError::Io {
            path: path.to_path_buf(),
            message: "No such file or directory".to_string(),
        });
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == PALETTE_EXTENSION)
        })
        .collect();

    files.sort();

    if files.is_empty() {
        return Err(PalError::Io {
            path: path.to_path_buf(),
            message: format!("No .{} files found", PALETTE_EXTENSION),
        });
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_single_file_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("brand.palette");
        fs::write(&file, "#FF0000\n").unwrap();

        let found = find_palette_files(&file).unwrap();
        assert_eq!(found, vec![file]);
    }

    #[test]
    fn test_directory_walk_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.palette"), "#00FF00\n").unwrap();
        fs::write(dir.path().join("a.palette"), "#FF0000\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a palette").unwrap();

        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("c.palette"), "#0000FF\n").unwrap();

        let found = find_palette_files(dir.path()).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.palette", "b.palette", "c.palette"]);
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_palette_files(dir.path()).is_err());
    }

    #[test]
    fn test_missing_path_is_an_error() {
        assert!(find_palette_files(Path::new("/nonexistent/pal/path")).is_err());
    }
}
