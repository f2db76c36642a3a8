//! ParagraphRenderer: `<p>` blocks
//!
//! A paragraph without children still renders, holding a single `<br />`,
//! so an empty document round-trips to visible markup.

use super::inline::render_inline_nodes;
use super::{HtmlRender, RenderError, class_attr};
use crate::config::RenderConfig;
use crate::document::BlockNode;

/// Paragraph renderer
pub struct ParagraphRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> ParagraphRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        ParagraphRenderer { config }
    }
}

impl HtmlRender for ParagraphRenderer<'_> {
    fn render(&self, node: &BlockNode) -> Result<String, RenderError> {
        let BlockNode::Paragraph(paragraph) = node else {
            return Err(RenderError::unsupported("ParagraphRenderer", node));
        };

        let content = if paragraph.children.is_empty() {
            "<br />".to_string()
        } else {
            render_inline_nodes(&paragraph.children, &self.config.link_class)
        };

        Ok(format!(
            "<p{}>{content}</p>",
            class_attr(&self.config.paragraph_class)
        ))
    }
}
