//! Image and standalone link blocks

use super::inline::render_anchor;
use super::{HtmlRender, RenderError, class_attr};
use crate::config::{ImageMode, RenderConfig};
use crate::config::consts::render::EMBED_CLASS;
use crate::document::BlockNode;
use html_escape::encode_double_quoted_attribute;

/// Image renderer
///
/// `src` and `alt` are escaped but otherwise emitted as-is; URLs are not
/// validated or rewritten.
pub struct ImageRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> ImageRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        ImageRenderer { config }
    }
}

impl HtmlRender for ImageRenderer<'_> {
    fn render(&self, node: &BlockNode) -> Result<String, RenderError> {
        let BlockNode::Image(image) = node else {
            return Err(RenderError::unsupported("ImageRenderer", node));
        };

        let tag = format!(
            "<img src=\"{}\" alt=\"{}\"{} />",
            encode_double_quoted_attribute(&image.src),
            encode_double_quoted_attribute(&image.alt),
            class_attr(&self.config.image_class)
        );

        Ok(match self.config.image_mode {
            ImageMode::Tag => tag,
            ImageMode::Embed => format!("<div{}>{tag}</div>", class_attr(EMBED_CLASS)),
        })
    }
}

/// Standalone link renderer
pub struct LinkRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> LinkRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        LinkRenderer { config }
    }
}

impl HtmlRender for LinkRenderer<'_> {
    fn render(&self, node: &BlockNode) -> Result<String, RenderError> {
        let BlockNode::Link(link) = node else {
            return Err(RenderError::unsupported("LinkRenderer", node));
        };

        Ok(render_anchor(link, &self.config.link_class))
    }
}
