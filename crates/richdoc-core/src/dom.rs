//! HTML DOM access
//!
//! Thin layer over html5ever + markup5ever_rcdom. The input string is parsed
//! once into an `RcDom`; converters then read elements through the helpers
//! below instead of touching `NodeData` directly.

use crate::error::{Result, RichdocError};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever::Attribute;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::cell::RefCell;

/// Elements that start a new block when met inside a container
const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "center",
    "details",
    "div",
    "dl",
    "fieldset",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "img",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "ul",
];

/// Elements whose content never reaches the document
const SKIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "head",
];

/// Nesting depth past which converters stop recursing and flatten a subtree
/// to its text
pub const MAX_NESTING_DEPTH: usize = 128;

/// A parsed HTML fragment
///
/// Owns the `RcDom` for as long as the body handle is in use: dropping the
/// dom detaches the children of every node in the tree.
pub struct ParsedHtml {
    dom: RcDom,
    body: Handle,
}

impl ParsedHtml {
    /// The `<body>` element; its children are the fragment's top-level nodes
    pub fn body(&self) -> &Handle {
        &self.body
    }

    pub fn document(&self) -> &Handle {
        &self.dom.document
    }
}

/// Parses an HTML fragment
///
/// The parser repairs malformed markup (unclosed tags, stray end tags) the
/// way a browser would; the body's children are the fragment's top-level
/// nodes in document order.
pub fn parse_fragment(html: &str) -> Result<ParsedHtml> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| RichdocError::HtmlParseFailed(e.to_string()))?;

    let body = find_descendant(&dom.document, "body").ok_or(RichdocError::HtmlBodyMissing)?;
    Ok(ParsedHtml { dom, body })
}

/// Local tag name of an element node, `None` for text/comments/etc.
pub fn element_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Gets attribute value by name from element attributes
pub fn get_attr(attrs: &RefCell<Vec<Attribute>>, name: &str) -> Option<String> {
    attrs
        .borrow()
        .iter()
        .find(|attr| attr.name.local.as_ref() == name)
        .map(|attr| attr.value.to_string())
}

/// Attribute lookup directly on a handle; `None` for non-elements
pub fn attr(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => get_attr(attrs, name),
        _ => None,
    }
}

/// Collects all text content below an element, skipping non-content elements
///
/// Walks with an explicit stack so arbitrarily deep trees are safe.
pub fn collect_text(handle: &Handle) -> String {
    let mut text = String::new();
    let mut stack: Vec<Handle> = handle.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        match &node.data {
            NodeData::Text { contents } => text.push_str(&contents.borrow()),
            NodeData::Element { .. } if !is_skipped(&node) => {
                stack.extend(node.children.borrow().iter().rev().cloned());
            }
            _ => {}
        }
    }
    text
}

/// True when the element holds any non-whitespace text
pub fn has_meaningful_text(handle: &Handle) -> bool {
    !trim_html_whitespace(&collect_text(handle)).is_empty()
}

/// Direct element children with the given tag name
pub fn child_elements(handle: &Handle, tag: &str) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| element_name(child) == Some(tag))
        .cloned()
        .collect()
}

/// First descendant element with the given tag name (depth-first, document order)
pub fn find_descendant(handle: &Handle, tag: &str) -> Option<Handle> {
    let mut stack: Vec<Handle> = handle.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        if element_name(&node) == Some(tag) {
            return Some(node);
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    None
}

pub fn is_block_element(handle: &Handle) -> bool {
    element_name(handle).is_some_and(|name| BLOCK_ELEMENTS.contains(&name))
}

pub fn is_skipped(handle: &Handle) -> bool {
    element_name(handle).is_some_and(|name| SKIPPED_ELEMENTS.contains(&name))
}

/// True when any direct child is a block-level element
pub fn has_block_children(handle: &Handle) -> bool {
    handle.children.borrow().iter().any(is_block_element)
}

/// ASCII whitespace as HTML defines it; U+00A0 and other Unicode spaces are text
pub fn is_html_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0C' | '\r')
}

pub fn trim_html_whitespace(text: &str) -> &str {
    text.trim_matches(is_html_whitespace)
}

/// Collapses HTML whitespace runs (including newlines) into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if is_html_whitespace(ch) {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}
