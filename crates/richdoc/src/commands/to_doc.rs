//! to-doc command - HTML to document JSON

use crate::context::{Context, read_input};
use anyhow::Result;
use std::path::PathBuf;

pub fn run(ctx: &Context, input: Option<PathBuf>, pretty: bool) -> Result<()> {
    let html = read_input(input.as_deref())?;
    let document = ctx.converter.to_document(&html);
    ctx.emit(&document.to_json(pretty)?)
}
