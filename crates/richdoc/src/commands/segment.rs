//! segment command - document to content blocks

use crate::context::{Context, read_input};
use anyhow::{Context as _, Result};
use log::debug;
use richdoc_core::{Document, segment};
use std::path::PathBuf;

/// # Arguments
///
/// * `html` - Input is an HTML fragment rather than document JSON
/// * `pretty` - Pretty-print the JSON output
pub fn run(ctx: &Context, input: Option<PathBuf>, html: bool, pretty: bool) -> Result<()> {
    let raw = read_input(input.as_deref())?;

    let document = if html {
        ctx.converter.to_document(&raw)
    } else {
        Document::from_json(&raw).context("Input is not a document")?
    };

    let blocks = ctx.converter.to_content_blocks(&document);
    debug!("{} content blocks", blocks.len());

    ctx.emit(&segment::to_json(&blocks, pretty)?)
}
