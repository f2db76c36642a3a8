//! HTML to document converter
//!
//! Parses an HTML fragment once and walks the body's children in document
//! order, dispatching each element to a node builder. A single source
//! element may expand into zero, one or several block nodes; results are
//! flattened into the root in order.
//!
//! Containers nested deeper than [`dom::MAX_NESTING_DEPTH`] are not walked;
//! their text becomes a single paragraph.

mod builders;
mod inline;

use crate::document::{BlockNode, Document, InlineNode, Paragraph};
use crate::dom;
use crate::error::Result;
use crate::format::TextFormat;
use inline::InlineCollector;
use log::{debug, trace};
use markup5ever_rcdom::{Handle, NodeData};

/// Inline elements that may appear bare at the top level of a fragment
const INLINE_ELEMENTS: &[&str] = &[
    "abbr", "b", "big", "br", "cite", "code", "del", "em", "font", "i", "ins", "kbd", "label",
    "mark", "q", "s", "samp", "small", "span", "strike", "strong", "sub", "sup", "time", "tt", "u",
    "var",
];

/// Converts an HTML fragment to a document
///
/// An input that yields no blocks (empty string, whitespace, empty
/// containers) produces [`Document::empty`].
///
/// # Errors
///
/// Returns error only if the HTML parser itself fails
pub fn convert(html: &str) -> Result<Document> {
    trace!("converting {} bytes of HTML", html.len());

    if html.trim().is_empty() {
        return Ok(Document::empty());
    }

    let parsed = dom::parse_fragment(html)?;

    let mut converter = HtmlDocumentConverter::new();
    converter.walk_children(parsed.body());

    Ok(converter.finalize())
}

/// Tree walker that accumulates block nodes
pub(super) struct HtmlDocumentConverter {
    /// Block accumulator for the container being walked
    pub(super) blocks: Vec<BlockNode>,
    /// Run of orphan inline content waiting to be wrapped in a paragraph
    current_paragraph: Option<InlineCollector>,
    /// Containers entered through [`Self::walk_nested`]
    depth: usize,
}

impl HtmlDocumentConverter {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            current_paragraph: None,
            depth: 0,
        }
    }

    /// Walks the children of a container element
    pub(super) fn walk_children(&mut self, handle: &Handle) {
        for child in handle.children.borrow().iter() {
            self.walk_node(child);
        }
        self.end_paragraph();
    }

    fn walk_node(&mut self, handle: &Handle) {
        match &handle.data {
            NodeData::Text { contents } => {
                let text = contents.borrow();
                if self.current_paragraph.is_some() || !text.trim().is_empty() {
                    self.inline_run()
                        .push_text(&dom::collapse_whitespace(&text), TextFormat::PLAIN);
                }
            }
            NodeData::Element { name, .. } => {
                let tag = name.local.as_ref();

                if dom::is_skipped(handle) {
                    debug!("skipping <{tag}>");
                    return;
                }

                if INLINE_ELEMENTS.contains(&tag) && !dom::has_block_children(handle) {
                    self.inline_run().collect_node(handle, TextFormat::PLAIN);
                    return;
                }

                // A link inside running text stays inline; a standalone one is a block
                if tag == "a" && self.current_paragraph.is_some() {
                    self.inline_run().collect_node(handle, TextFormat::PLAIN);
                    return;
                }

                self.end_paragraph();
                let converted = builders::convert_element(self, tag, handle);
                self.blocks.extend(converted);
            }
            _ => {}
        }
    }

    fn inline_run(&mut self) -> &mut InlineCollector {
        self.current_paragraph.get_or_insert_with(InlineCollector::new)
    }

    /// Flushes the open inline run as a paragraph (plus hoisted images)
    fn end_paragraph(&mut self) {
        if let Some(collector) = self.current_paragraph.take() {
            let (children, images) = collector.finish();
            self.blocks.extend(builders::paragraph_with_images(children, images));
        }
    }

    /// Execute closure with saved block accumulator
    ///
    /// Returns the blocks accumulated during the closure and restores the
    /// previous accumulator.
    pub(super) fn with_saved_blocks<F>(&mut self, f: F) -> Vec<BlockNode>
    where
        F: FnOnce(&mut Self),
    {
        let saved_blocks = std::mem::take(&mut self.blocks);
        let saved_paragraph = self.current_paragraph.take();

        f(self);
        self.end_paragraph();

        self.current_paragraph = saved_paragraph;
        std::mem::replace(&mut self.blocks, saved_blocks)
    }

    /// Walks a block container and returns its blocks
    pub(super) fn walk_nested(&mut self, handle: &Handle) -> Vec<BlockNode> {
        if self.depth >= dom::MAX_NESTING_DEPTH {
            debug!("nesting limit reached, flattening container to text");
            return builders::flattened_paragraph(handle);
        }

        self.depth += 1;
        let blocks = self.with_saved_blocks(|c| c.walk_children(handle));
        self.depth -= 1;
        blocks
    }

    fn finalize(mut self) -> Document {
        self.end_paragraph();

        let document = Document::new(self.blocks);
        if document.is_blank() {
            debug!("HTML produced no visible content, using empty document");
            return Document::empty();
        }

        document
    }
}

/// True when inline nodes carry visible text
pub(super) fn has_visible_text(nodes: &[InlineNode]) -> bool {
    !crate::document::inline_text(nodes).trim().is_empty()
}

/// Paragraph helper used by builders
pub(super) fn paragraph(children: Vec<InlineNode>) -> BlockNode {
    BlockNode::Paragraph(Paragraph { children })
}
