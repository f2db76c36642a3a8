//! HeadingRenderer: `<h1>` - `<h6>` blocks

use super::inline::render_inline_nodes;
use super::{HtmlRender, RenderError, class_attr};
use crate::config::RenderConfig;
use crate::document::BlockNode;

/// Heading renderer; the class comes from the per-level table
pub struct HeadingRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> HeadingRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        HeadingRenderer { config }
    }
}

impl HtmlRender for HeadingRenderer<'_> {
    fn render(&self, node: &BlockNode) -> Result<String, RenderError> {
        let BlockNode::Heading(heading) = node else {
            return Err(RenderError::unsupported("HeadingRenderer", node));
        };

        let level = heading.level.clamp(1, 6);
        let content = render_inline_nodes(&heading.children, &self.config.link_class);

        Ok(format!(
            "<h{level}{}>{content}</h{level}>",
            class_attr(self.config.heading_class(level))
        ))
    }
}
