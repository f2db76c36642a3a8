use anyhow::{Context as _, Result};
use std::io::{self, Write};
use std::path::Path;

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Writes to `path`, or to stdout when no path is given
pub fn emit(s: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{s}\n"))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => print_text(s).context("Failed to write to stdout"),
    }
}
