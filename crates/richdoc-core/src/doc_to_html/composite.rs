//! CompositeRenderer: document-level dispatch
//!
//! Every root child goes to the renderer for its node type; the outputs are
//! concatenated in order. Unknown nodes contribute nothing.

use super::heading::HeadingRenderer;
use super::list::ListRenderer;
use super::media::{ImageRenderer, LinkRenderer};
use super::paragraph::ParagraphRenderer;
use super::table::TableRenderer;
use super::{HtmlRender, RenderError};
use crate::config::RenderConfig;
use crate::document::{BlockNode, Document};
use log::{debug, trace};

/// Composite renderer over all block node types
pub struct CompositeRenderer<'a> {
    heading: HeadingRenderer<'a>,
    image: ImageRenderer<'a>,
    link: LinkRenderer<'a>,
    list: ListRenderer<'a>,
    paragraph: ParagraphRenderer<'a>,
    table: TableRenderer<'a>,
}

impl<'a> CompositeRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        CompositeRenderer {
            heading: HeadingRenderer::new(config),
            image: ImageRenderer::new(config),
            link: LinkRenderer::new(config),
            list: ListRenderer::new(config),
            paragraph: ParagraphRenderer::new(config),
            table: TableRenderer::new(config),
        }
    }

    /// Renders every root child and concatenates the results
    pub fn render_document(&self, document: &Document) -> String {
        trace!("rendering {} blocks", document.children().len());
        self.render_many(document.children())
    }

    /// Renders a slice of blocks; nodes that fail to render are skipped
    pub fn render_many(&self, nodes: &[BlockNode]) -> String {
        nodes
            .iter()
            .filter_map(|node| match self.render(node) {
                Ok(html) => Some(html),
                Err(e) => {
                    debug!("skipping block: {e}");
                    None
                }
            })
            .collect()
    }
}

impl HtmlRender for CompositeRenderer<'_> {
    fn render(&self, node: &BlockNode) -> Result<String, RenderError> {
        match node {
            BlockNode::Paragraph(_) => self.paragraph.render(node),
            BlockNode::Heading(_) => self.heading.render(node),
            BlockNode::List(_) => self.list.render(node),
            BlockNode::Table(_) => self.table.render(node),
            BlockNode::Image(_) => self.image.render(node),
            BlockNode::Link(_) => self.link.render(node),
            BlockNode::Unknown => {
                debug!("unknown block node rendered as empty string");
                Ok(String::new())
            }
        }
    }
}
