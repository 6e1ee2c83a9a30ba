//! Shared test fixtures and the end-to-end pipeline suite.

use tempfile::TempDir;

mod pipeline;

pub fn create_test_notes_dir() -> TempDir {
    TempDir::new().expect("create temp notes dir")
}

pub fn create_test_file(notes_dir: &TempDir, relative: &str, content: &str) -> std::path::PathBuf {
    let path = notes_dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(&path, content).expect("write test file");
    path
}
