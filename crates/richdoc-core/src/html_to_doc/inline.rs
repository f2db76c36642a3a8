//! Inline content collection
//!
//! The active formatting bitmask is passed down each recursive call; every
//! nested formatting element ORs its bits into the value handed to its
//! children. Nothing is shared between sibling subtrees.
//!
//! Past [`dom::MAX_NESTING_DEPTH`] nested elements the remaining subtree is
//! flattened to text in the current format.

use crate::document::{Image, InlineNode, Link, TextNode};
use crate::dom;
use crate::format::{TextFormat, encode_element};
use markup5ever_rcdom::{Handle, NodeData};

/// Accumulates inline nodes for one block, hoisting images out of the text
pub(super) struct InlineCollector {
    nodes: Vec<InlineNode>,
    images: Vec<Image>,
    depth: usize,
}

impl InlineCollector {
    pub(super) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            images: Vec::new(),
            depth: 0,
        }
    }

    pub(super) fn push_text(&mut self, text: &str, format: TextFormat) {
        if !text.is_empty() {
            self.nodes.push(InlineNode::Text(TextNode::new(text, format)));
        }
    }

    pub(super) fn collect_children(&mut self, handle: &Handle, format: TextFormat) {
        for child in handle.children.borrow().iter() {
            self.collect_node(child, format);
        }
    }

    pub(super) fn collect_node(&mut self, handle: &Handle, format: TextFormat) {
        match &handle.data {
            NodeData::Text { contents } => {
                self.push_text(&dom::collapse_whitespace(&contents.borrow()), format);
            }
            NodeData::Element { name, attrs, .. } => {
                if dom::is_skipped(handle) {
                    return;
                }

                if self.depth >= dom::MAX_NESTING_DEPTH {
                    self.push_text(&dom::collapse_whitespace(&dom::collect_text(handle)), format);
                    return;
                }

                match name.local.as_ref() {
                    "br" => self.nodes.push(InlineNode::LineBreak),
                    "img" => self.images.push(image_from(handle)),
                    "a" => {
                        let mut inner = InlineCollector {
                            depth: self.depth + 1,
                            ..InlineCollector::new()
                        };
                        inner.collect_children(handle, format);
                        let (children, images) = inner.finish();
                        self.images.extend(images);
                        self.nodes.push(InlineNode::Link(Link {
                            url: dom::get_attr(attrs, "href").unwrap_or_default(),
                            target: dom::get_attr(attrs, "target"),
                            children,
                        }));
                    }
                    tag => {
                        let style = dom::get_attr(attrs, "style");
                        let nested = format | encode_element(tag, style.as_deref());

                        // Keep words of adjacent blocks apart (e.g. two <p> inside one <li>)
                        if dom::is_block_element(handle) && !self.nodes.is_empty() {
                            self.push_text(" ", TextFormat::PLAIN);
                        }

                        self.depth += 1;
                        self.collect_children(handle, nested);
                        self.depth -= 1;
                    }
                }
            }
            _ => {}
        }
    }

    /// Normalized inline nodes plus the images found along the way
    pub(super) fn finish(self) -> (Vec<InlineNode>, Vec<Image>) {
        (normalize(self.nodes), self.images)
    }
}

/// Image block from an `<img>` element; attributes are taken verbatim
pub(super) fn image_from(handle: &Handle) -> Image {
    Image {
        src: dom::attr(handle, "src").unwrap_or_default(),
        alt: dom::attr(handle, "alt").unwrap_or_default(),
    }
}

/// Merges same-format runs, drops doubled spaces and trims line edges
fn normalize(nodes: Vec<InlineNode>) -> Vec<InlineNode> {
    let mut out: Vec<InlineNode> = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            InlineNode::Text(mut text) => {
                let at_line_start = matches!(out.last(), None | Some(InlineNode::LineBreak));
                if at_line_start || ends_with_space(out.last()) {
                    text.text = text.text.trim_start_matches(dom::is_html_whitespace).to_string();
                }
                if text.text.is_empty() {
                    continue;
                }
                if let Some(InlineNode::Text(prev)) = out.last_mut()
                    && prev.format == text.format
                {
                    prev.text.push_str(&text.text);
                    continue;
                }
                out.push(InlineNode::Text(text));
            }
            InlineNode::LineBreak => {
                trim_trailing(&mut out);
                out.push(InlineNode::LineBreak);
            }
            other => out.push(other),
        }
    }

    trim_trailing(&mut out);
    out
}

fn ends_with_space(node: Option<&InlineNode>) -> bool {
    match node {
        Some(InlineNode::Text(text)) => text.text.ends_with(' '),
        Some(InlineNode::Link(link)) => {
            crate::document::inline_text(&link.children).ends_with(' ')
        }
        _ => false,
    }
}

fn trim_trailing(nodes: &mut Vec<InlineNode>) {
    while let Some(InlineNode::Text(text)) = nodes.last_mut() {
        let trimmed_len = text.text.trim_end_matches(dom::is_html_whitespace).len();
        text.text.truncate(trimmed_len);
        if !text.text.is_empty() {
            break;
        }
        nodes.pop();
    }
}
