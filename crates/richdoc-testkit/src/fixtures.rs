//! Shared HTML and Document JSON fixtures
//!
//! Fixtures live in `fixtures/` at the workspace root, e.g.
//! `fixtures/html/course_page.html`.

use std::path::PathBuf;

/// Absolute path of a fixture, relative to the workspace `fixtures/` directory
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join(relative)
}

/// Reads a fixture to a string
///
/// # Panics
///
/// Panics if the fixture does not exist.
pub fn read_fixture(relative: &str) -> String {
    let path = fixture_path(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}
