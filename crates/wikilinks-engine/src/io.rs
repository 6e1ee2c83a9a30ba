//! Notes-vault filesystem access: scanning markdown files and deriving the
//! permalink registry from what is on disk.

use crate::path::collapse_index;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Read a markdown file and return its content
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for markdown files in the notes directory
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, notes_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Derive the known-permalink set from the markdown files under the notes
/// root.
///
/// Every file becomes `/relative/path/without/.md`; an `index.md` collapses
/// onto its folder so links written either way resolve to the same entry.
/// Order is the sorted scan order, which keeps suffix-match tie-breaking
/// stable across runs.
pub fn permalinks_from_vault(notes_root: &Path) -> Result<Vec<String>, IoError> {
    let files = scan_markdown_files(notes_root)?;
    Ok(files
        .iter()
        .map(|file| {
            let path = file.as_str();
            let stem = path.strip_suffix(".md").unwrap_or(path);
            collapse_index(format!("/{stem}"))
        })
        .collect())
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
            && let Ok(relative) = path.strip_prefix(root)
        {
            files.push(RelativePathBuf::from_path(relative).map_err(|_| {
                IoError::InvalidNotesDir(format!("non-relative entry {}", path.display()))
            })?);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
