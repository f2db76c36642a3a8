//! to-html command - document JSON to HTML

use crate::context::{Context, read_input};
use anyhow::{Context as _, Result};
use richdoc_core::Document;
use std::path::PathBuf;

pub fn run(ctx: &Context, input: Option<PathBuf>) -> Result<()> {
    let json = read_input(input.as_deref())?;
    let document = Document::from_json(&json).context("Input is not a document")?;
    ctx.emit(&ctx.converter.to_html(&document))
}
