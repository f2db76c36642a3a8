//! Test utilities for richdoc
//!
//! This crate provides shared testing utilities used across the richdoc workspace.

use tempfile::TempDir;

pub mod documents;
pub mod fixtures;

pub use documents::{paragraph_json, paragraphs_document_json, text_json};
pub use fixtures::{fixture_path, read_fixture};

/// Creates a temporary directory within `.tmp/` at the project root
///
/// # Returns
///
/// A `TempDir` instance that automatically cleans up on drop.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or the directories
/// cannot be created.
///
/// # Examples
///
/// ```rust
/// use richdoc_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("input.html");
/// std::fs::write(&file_path, "<p>hi</p>").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
