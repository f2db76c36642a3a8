//! Inline node rendering

use super::class_attr;
use crate::document::{InlineNode, Link};
use crate::format::wrap_text;
use html_escape::encode_double_quoted_attribute;

/// Renders inline nodes to HTML (no trailing newlines)
pub(super) fn render_inline_nodes(nodes: &[InlineNode], link_class: &str) -> String {
    nodes
        .iter()
        .map(|node| match node {
            InlineNode::Text(text) => wrap_text(&text.text, text.format),
            InlineNode::Link(link) => render_anchor(link, link_class),
            InlineNode::LineBreak => "<br />".to_string(),
            InlineNode::Unknown => String::new(),
        })
        .collect()
}

/// `<a href="…">…</a>`; `target="_blank"` also gets a safe `rel`
pub(super) fn render_anchor(link: &Link, link_class: &str) -> String {
    let mut attrs = format!(" href=\"{}\"", encode_double_quoted_attribute(&link.url));

    if let Some(target) = link.target.as_deref().filter(|t| !t.is_empty()) {
        attrs.push_str(&format!(
            " target=\"{}\"",
            encode_double_quoted_attribute(target)
        ));
        if target == "_blank" {
            attrs.push_str(" rel=\"noopener noreferrer\"");
        }
    }

    attrs.push_str(&class_attr(link_class));

    format!(
        "<a{attrs}>{}</a>",
        render_inline_nodes(&link.children, link_class)
    )
}
